use std::collections::BTreeMap;

use log::{debug, info};

use super::context::Context;
use super::ngram_model::NGramModel;
use super::tokenizer::{count_words, preprocess};
use crate::error::{Error, Result};

/// Summary of one training pass.
///
/// Pure read of the tables built during training.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrainingReport {
	/// Number of raw documents fed in.
	pub documents: usize,
	/// Whitespace-delimited words before preprocessing.
	pub words: usize,
	/// Tokens after preprocessing.
	pub tokens: usize,
	/// Unique contexts per order.
	pub unique_contexts: BTreeMap<usize, usize>,
}

/// The top-level model holding one independent `NGramModel` per order.
///
/// This struct manages:
/// - `ngrams`: a map from n-gram order to its `(counts, probabilities)` pair
///
/// Orders never interpolate or back off to each other.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiGramModel {
	ngrams: BTreeMap<usize, NGramModel>,
}

impl MultiGramModel {
	/// Creates an untrained model for the given orders.
	///
	/// Duplicated orders are collapsed.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `orders` is empty or contains an order < 2.
	pub fn new(orders: &[usize]) -> Result<Self> {
		if orders.is_empty() {
			return Err(Error::invalid_argument("orders", "at least one order is required"));
		}

		let mut ngrams = BTreeMap::new();
		for &n in orders {
			ngrams.insert(n, NGramModel::new(n)?);
		}
		Ok(Self { ngrams })
	}

	/// Trained orders, ascending.
	pub fn orders(&self) -> impl Iterator<Item = usize> + '_ {
		self.ngrams.keys().copied()
	}

	/// Returns the model of order `n`.
	///
	/// # Errors
	/// Returns `UnknownOrder` if no such order was configured.
	pub fn get(&self, n: usize) -> Result<&NGramModel> {
		self.ngrams.get(&n).ok_or(Error::UnknownOrder(n))
	}

	/// Trains every order on a set of raw documents.
	///
	/// # Behavior
	/// - Documents are joined with a single space, so n-grams may span
	///   document boundaries.
	/// - The joined text is preprocessed once and counted for every order.
	/// - Previous tables are discarded: each order is rebuilt from scratch
	///   and swapped in.
	///
	/// A corpus with fewer tokens than an order leaves that order empty;
	/// generation with it always falls back.
	pub fn train<I, S>(&mut self, documents: I) -> Result<TrainingReport>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut report = TrainingReport::default();
		let mut combined = String::new();

		for document in documents {
			let document = document.as_ref();
			let words = count_words(document);
			report.documents += 1;
			report.words += words;
			debug!("document {}: {} words", report.documents, words);

			if !combined.is_empty() {
				combined.push(' ');
			}
			combined.push_str(document);
		}

		let tokens = preprocess(&combined);
		report.tokens = tokens.len();
		info!(
			"{} documents, {} words before preprocessing, {} tokens after",
			report.documents, report.words, report.tokens
		);

		for (n, model) in self.ngrams.iter_mut() {
			*model = NGramModel::from_tokens(*n, &tokens)?;
			report.unique_contexts.insert(*n, model.counts().len());
			info!("order {}: {} unique contexts", n, model.counts().len());
		}

		Ok(report)
	}

	/// Up to `k` most likely continuations of `context` in order `n`.
	///
	/// # Errors
	/// Returns `UnknownOrder` if no such order was configured.
	pub fn top_k(&self, n: usize, context: &Context, k: usize) -> Result<Vec<(&str, f64)>> {
		Ok(self.get(n)?.probabilities().top_k(context, k))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const HAMLET: &str = "To be, or not to be: that is the question.";
	const MACBETH: &str = "Tomorrow, and tomorrow, and tomorrow.";

	#[test]
	fn test_train_report() {
		let mut model = MultiGramModel::new(&[2, 3, 4]).unwrap();
		let report = model.train([HAMLET, MACBETH]).unwrap();

		assert_eq!(report.documents, 2);
		assert_eq!(report.words, 15);
		assert_eq!(report.tokens, 15);
		assert_eq!(report.unique_contexts.keys().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
		assert_eq!(report.unique_contexts[&2], model.get(2).unwrap().counts().len());
	}

	#[test]
	fn test_ngrams_span_documents() {
		let mut model = MultiGramModel::new(&[2]).unwrap();
		model.train(["to be", "or not"]).unwrap();

		let bigrams = model.get(2).unwrap().counts();
		assert_eq!(bigrams.count(&Context::from(["be"]), "or"), 1);
	}

	#[test]
	fn test_orders_are_independent() {
		let mut model = MultiGramModel::new(&[2, 3]).unwrap();
		model.train([HAMLET]).unwrap();

		let bigrams = model.get(2).unwrap();
		let trigrams = model.get(3).unwrap();
		assert!(bigrams.counts().iter().all(|(c, _)| c.arity() == 1));
		assert!(trigrams.counts().iter().all(|(c, _)| c.arity() == 2));
		assert_eq!(trigrams.counts().count(&Context::from(["to", "be"]), "or"), 1);
		assert_eq!(trigrams.counts().count(&Context::from(["to", "be"]), "that"), 1);
	}

	#[test]
	fn test_retraining_replaces_tables() {
		let mut model = MultiGramModel::new(&[2]).unwrap();
		model.train(["a b"]).unwrap();
		model.train(["c d"]).unwrap();

		let bigrams = model.get(2).unwrap().counts();
		assert_eq!(bigrams.count(&Context::from(["a"]), "b"), 0);
		assert_eq!(bigrams.count(&Context::from(["c"]), "d"), 1);
	}

	#[test]
	fn test_degenerate_corpus() {
		let mut model = MultiGramModel::new(&[2, 3, 4]).unwrap();
		let report = model.train(Vec::<String>::new()).unwrap();

		assert_eq!(report.documents, 0);
		assert_eq!(report.tokens, 0);
		assert!(report.unique_contexts.values().all(|n| *n == 0));
	}

	#[test]
	fn test_top_k() {
		let mut model = MultiGramModel::new(&[3]).unwrap();
		model.train([HAMLET]).unwrap();

		let top = model.top_k(3, &Context::from(["to", "be"]), 5).unwrap();
		assert_eq!(top.len(), 2);
		assert!(model.top_k(2, &Context::from(["to"]), 5).is_err());
	}

	#[test]
	fn test_unknown_order_and_invalid_orders() {
		let model = MultiGramModel::new(&[2, 2, 3]).unwrap();
		assert_eq!(model.orders().collect::<Vec<_>>(), vec![2, 3]);
		assert!(matches!(model.get(4), Err(Error::UnknownOrder(4))));

		assert!(MultiGramModel::new(&[]).is_err());
		assert!(MultiGramModel::new(&[1, 2]).is_err());
	}
}
