use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::probability_table::ProbabilityTable;
use super::tokenizer::is_single_token;
use crate::error::{Error, Result};

/// Tokens drawn, uniformly, when a context has no training data.
///
/// The fallback ignores both the order and the context.
pub const DEFAULT_FALLBACK_WORDS: [&str; 5] = ["the", "and", "to", "of", "a"];

/// Draws next tokens from a probability table.
///
/// # Responsibilities
/// - Weighted draw over the distribution of a known context
/// - Uniform draw over the fallback vocabulary for an unseen context
///
/// # Invariants
/// - The fallback vocabulary is never empty
/// - No state other than the RNG is carried between draws
#[derive(Clone, Debug)]
pub struct Sampler<R = StdRng> {
	rng: R,
	fallback_words: Vec<String>,
}

impl Sampler<StdRng> {
	/// Creates a sampler backed by `StdRng`.
	///
	/// - `Some(seed)` gives a reproducible sequence of draws.
	/// - `None` seeds from the operating system.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `fallback_words` is not a valid vocabulary.
	pub fn from_seed(seed: Option<u64>, fallback_words: Vec<String>) -> Result<Self> {
		let rng = match seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Self::new(rng, fallback_words)
	}
}

impl<R: Rng> Sampler<R> {
	/// Creates a sampler from any RNG and fallback vocabulary.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `fallback_words` is empty, or if a word
	/// is empty or contains a separator (it would not count as one word
	/// of the generated text).
	pub fn new(rng: R, fallback_words: Vec<String>) -> Result<Self> {
		if fallback_words.is_empty() {
			return Err(Error::invalid_argument("fallback_words", "must not be empty"));
		}
		if let Some(word) = fallback_words.iter().find(|w| !is_single_token(w)) {
			return Err(Error::invalid_argument(
				"fallback_words",
				format!("{word:?} is not a single token"),
			));
		}
		Ok(Self { rng, fallback_words })
	}

	pub fn fallback_words(&self) -> &[String] {
		&self.fallback_words
	}

	/// Draws the token following `context` in `model`.
	///
	/// An unseen context silently gives a fallback word.
	pub fn sample(&mut self, context: &[String], model: &ProbabilityTable) -> String {
		if let Some(token) = model.get(context).and_then(|d| d.sample(&mut self.rng)) {
			return token.to_owned();
		}

		debug!("unseen {}-gram context {:?}, using fallback", model.order(), context);
		self.fallback()
	}

	fn fallback(&mut self) -> String {
		let index = self.rng.random_range(0..self.fallback_words.len());
		self.fallback_words[index].clone()
	}
}
