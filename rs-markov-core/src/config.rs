use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::sampler::DEFAULT_FALLBACK_WORDS;
use crate::model::tokenizer::is_single_token;

/// Settings for building a model and drawing from it.
///
/// Every field has a default, so a partial configuration file is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
	/// N-gram orders to train, each >= 2.
	pub orders: Vec<usize>,

	/// Words drawn uniformly for unseen contexts.
	pub fallback_words: Vec<String>,

	/// RNG seed. `None` uses OS entropy.
	pub seed: Option<u64>,

	/// Number of continuations listed when reporting a sample context.
	pub report_top_k: usize,
}

impl Default for ModelConfig {
	fn default() -> Self {
		Self {
			orders: vec![2, 3, 4],
			fallback_words: DEFAULT_FALLBACK_WORDS.iter().map(|w| (*w).to_owned()).collect(),
			seed: None,
			report_top_k: 5,
		}
	}
}

impl ModelConfig {
	/// Checks the configuration.
	///
	/// # Errors
	/// Returns `InvalidArgument` if:
	/// - no order is given, or an order is < 2
	/// - the fallback vocabulary is empty
	/// - a fallback word is empty or contains a separator
	pub fn validate(&self) -> Result<()> {
		if self.orders.is_empty() {
			return Err(Error::invalid_argument("orders", "at least one order is required"));
		}
		if let Some(n) = self.orders.iter().find(|n| **n < 2) {
			return Err(Error::invalid_argument("orders", format!("must be >= 2, got {n}")));
		}
		if self.fallback_words.is_empty() {
			return Err(Error::invalid_argument("fallback_words", "must not be empty"));
		}
		if let Some(word) = self.fallback_words.iter().find(|w| !is_single_token(w)) {
			return Err(Error::invalid_argument(
				"fallback_words",
				format!("{word:?} is not a single token"),
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	#[test]
	fn test_default_is_valid() {
		let config = ModelConfig::default();
		assert!(config.validate().is_ok());
		assert_eq!(config.orders, vec![2, 3, 4]);
		assert_eq!(config.fallback_words, vec!["the", "and", "to", "of", "a"]);
		assert_eq!(config.seed, None);
	}

	#[rstest(
		config,
		expected_arg,
		case::no_orders(ModelConfig { orders: vec![], ..Default::default() }, "orders"),
		case::order_one(ModelConfig { orders: vec![2, 1], ..Default::default() }, "orders"),
		case::no_fallback(ModelConfig { fallback_words: vec![], ..Default::default() }, "fallback_words"),
		case::blank_fallback(ModelConfig { fallback_words: vec!["".to_owned()], ..Default::default() }, "fallback_words"),
		case::spaced_fallback(ModelConfig { fallback_words: vec!["of the".to_owned()], ..Default::default() }, "fallback_words")
	)]
	fn test_invalid_config(config: ModelConfig, expected_arg: &str) {
		match config.validate() {
			Err(Error::InvalidArgument { arg, .. }) => assert_eq!(arg, expected_arg),
			other => panic!("expected invalid argument, got {other:?}"),
		}
	}
}
