use super::count_table::CountTable;
use super::probability_table::ProbabilityTable;
use crate::error::Result;

/// Represents an n-gram model over word tokens.
///
/// The `NGramModel` pairs the raw counts of one order `n` with the
/// probabilities derived from them.
///
/// # Responsibilities
/// - Accumulate `(n-1)`-token context counts from a token sequence
/// - Rebuild the probability table once counting is done
///
/// # Invariants
/// - `n` is always >= 2
/// - `probabilities` is always the normalization of `counts`
/// - Models of different orders never share state
#[derive(Clone, Debug, PartialEq)]
pub struct NGramModel {
	counts: CountTable,
	probabilities: ProbabilityTable,
}

impl NGramModel {
	/// Creates an empty n-gram model of order `n`.
	///
	/// # Errors
	/// Returns an error if `n < 2`.
	pub fn new(n: usize) -> Result<Self> {
		Ok(Self {
			counts: CountTable::new(n)?,
			probabilities: ProbabilityTable::empty(n),
		})
	}

	/// Builds a model of order `n` from a single training pass over `tokens`.
	pub fn from_tokens(n: usize, tokens: &[String]) -> Result<Self> {
		let mut model = Self::new(n)?;
		model.train(tokens);
		Ok(model)
	}

	pub fn order(&self) -> usize {
		self.counts.order()
	}

	/// Adds the n-grams of `tokens` and re-derives the probabilities.
	///
	/// # Notes
	/// - The probability table is replaced, never patched.
	/// - Sequences shorter than `n` add nothing.
	pub fn train(&mut self, tokens: &[String]) {
		self.counts.accumulate(tokens);
		self.probabilities = ProbabilityTable::normalize(&self.counts);
	}

	pub fn counts(&self) -> &CountTable {
		&self.counts
	}

	pub fn probabilities(&self) -> &ProbabilityTable {
		&self.probabilities
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::context::Context;
	use crate::model::tokenizer::preprocess;

	#[test]
	fn test_probabilities_follow_counts() {
		let model = NGramModel::from_tokens(3, &preprocess("to be or not to be or else")).unwrap();

		assert_eq!(model.order(), 3);
		assert_eq!(model.counts().len(), model.probabilities().len());
		assert_eq!(model.counts().count(&Context::from(["be", "or"]), "not"), 1);
		assert_eq!(model.counts().count(&Context::from(["be", "or"]), "else"), 1);
		assert_eq!(model.probabilities().top_k(&Context::from(["to", "be"]), 1), vec![("or", 1.0)]);
	}

	#[test]
	fn test_retraining_replaces_probabilities() {
		let mut model = NGramModel::from_tokens(2, &preprocess("a b")).unwrap();
		let before = model.probabilities().clone();

		model.train(&preprocess("a c"));
		assert_ne!(&before, model.probabilities());
		assert_eq!(*model.probabilities(), ProbabilityTable::normalize(model.counts()));
	}

	#[test]
	fn test_degenerate_corpus() {
		let model = NGramModel::from_tokens(4, &preprocess("too short")).unwrap();
		assert!(model.counts().is_empty());
		assert!(model.probabilities().is_empty());
	}

	#[test]
	fn test_invalid_order() {
		assert!(NGramModel::new(1).is_err());
	}
}
