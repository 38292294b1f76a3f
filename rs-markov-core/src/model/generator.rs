use log::trace;
use rand::Rng;
use rand::rngs::StdRng;

use super::context::Context;
use super::multigram_model::{MultiGramModel, TrainingReport};
use super::sampler::Sampler;
use super::tokenizer::is_single_token;
use crate::config::ModelConfig;
use crate::error::{Error, Result};

/// High-level generator driving a `Sampler` over a `MultiGramModel`.
///
/// # Responsibilities
/// - Own the trained model and the sampler (RNG + fallback vocabulary)
/// - Draw single next tokens for a context and order
/// - Grow a seed into a word sequence of a requested length
#[derive(Clone, Debug)]
pub struct Generator<R = StdRng> {
	model: MultiGramModel,
	sampler: Sampler<R>,
}

impl Generator<StdRng> {
	/// Creates an untrained generator from a configuration.
	///
	/// # Errors
	/// Returns `InvalidArgument` if the configuration does not validate.
	pub fn from_config(config: &ModelConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self {
			model: MultiGramModel::new(&config.orders)?,
			sampler: Sampler::from_seed(config.seed, config.fallback_words.clone())?,
		})
	}
}

impl<R: Rng> Generator<R> {
	pub fn new(model: MultiGramModel, sampler: Sampler<R>) -> Self {
		Self { model, sampler }
	}

	pub fn model(&self) -> &MultiGramModel {
		&self.model
	}

	/// Trains every configured order on `documents`, replacing prior tables.
	pub fn train<I, S>(&mut self, documents: I) -> Result<TrainingReport>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.model.train(documents)
	}

	/// Draws the token following `context` with the model of order `n`.
	///
	/// A context that was never observed (including one of the wrong
	/// length) is answered from the fallback vocabulary.
	///
	/// # Errors
	/// Returns `UnknownOrder` if the model has no order `n`.
	pub fn sample_next(&mut self, context: &Context, n: usize) -> Result<String> {
		let model = self.model.get(n)?;
		Ok(self.sampler.sample(context.tokens(), model.probabilities()))
	}

	/// Generates a sequence of `target_length` words starting from `seed`.
	///
	/// # Behavior
	/// - The sequence starts as the seed's tokens.
	/// - While shorter than `target_length`, the last `n - 1` tokens are
	///   used as context and one sampled token is appended.
	/// - If `target_length` is not above the seed length, the seed is
	///   returned as-is.
	///
	/// # Returns
	/// The tokens joined with single spaces.
	///
	/// # Errors
	/// - `UnknownOrder` if the model has no order `n`.
	/// - `InvalidArgument` if `seed` does not hold exactly `n - 1` tokens,
	///   or holds an empty token or one containing a separator.
	///
	/// Nothing is generated when an error is returned.
	pub fn generate(&mut self, seed: &Context, target_length: usize, n: usize) -> Result<String> {
		let model = self.model.get(n)?;
		let context_len = n - 1;

		if seed.arity() != context_len {
			return Err(Error::invalid_argument(
				"seed",
				format!("order {n} needs a context of {context_len} tokens, got {}", seed.arity()),
			));
		}
		if let Some(token) = seed.tokens().iter().find(|t| !is_single_token(t)) {
			return Err(Error::invalid_argument("seed", format!("{token:?} is not a single token")));
		}

		let mut sequence: Vec<String> = seed.tokens().to_vec();
		sequence.reserve(target_length.saturating_sub(sequence.len()));

		while sequence.len() < target_length {
			let context = &sequence[sequence.len() - context_len..];
			let next = self.sampler.sample(context, model.probabilities());
			trace!("{}-gram {:?} -> {}", n, context, next);
			sequence.push(next);
		}

		Ok(sequence.join(" "))
	}
}
