use std::collections::HashMap;

use super::context::Context;
use super::count_table::CountTable;
use super::distribution::Distribution;

/// Normalized conditional distributions for one n-gram order.
///
/// Derived entirely from a [`CountTable`] and recomputed, never updated
/// in place. Once built it is read-only.
///
/// # Invariants
/// - Exactly one distribution per context with a positive total count
/// - Each distribution sums to 1.0 within floating-point tolerance
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityTable {
	n: usize,
	distributions: HashMap<Context, Distribution>,
}

impl ProbabilityTable {
	/// Converts raw counts into per-context probabilities.
	///
	/// Each token gets `count / total`, where `total` is the sum of the
	/// counts of its context. Contexts with a zero total are skipped.
	/// Deterministic: normalizing the same table twice gives equal results.
	pub fn normalize(counts: &CountTable) -> Self {
		let distributions = counts
			.iter()
			.filter_map(|(context, state)| {
				Distribution::from_state(state).map(|distribution| (context.clone(), distribution))
			})
			.collect();

		Self { n: counts.order(), distributions }
	}

	/// An empty table, as produced by an untrained model.
	pub(crate) fn empty(n: usize) -> Self {
		Self { n, distributions: HashMap::new() }
	}

	pub fn order(&self) -> usize {
		self.n
	}

	/// Distribution of the token following `context`, if it was observed.
	pub fn get(&self, context: &[String]) -> Option<&Distribution> {
		self.distributions.get(context)
	}

	/// Up to `k` most likely continuations of `context`.
	///
	/// An unseen context gives an empty list.
	pub fn top_k(&self, context: &Context, k: usize) -> Vec<(&str, f64)> {
		self.get(context.tokens()).map(|d| d.top_k(k)).unwrap_or_default()
	}

	pub fn len(&self) -> usize {
		self.distributions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.distributions.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&Context, &Distribution)> {
		self.distributions.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use float_cmp::approx_eq;

	fn counts(order: usize, words: &[&str]) -> CountTable {
		let tokens: Vec<String> = words.iter().map(|w| (*w).to_owned()).collect();
		let mut table = CountTable::new(order).unwrap();
		table.accumulate(&tokens);
		table
	}

	#[test]
	fn test_normalize_bigrams() {
		let table = ProbabilityTable::normalize(&counts(2, &["a", "b", "c", "a", "b", "d"]));

		assert_eq!(table.order(), 2);
		assert_eq!(table.len(), 3);
		let b = table.get(&["b".to_owned()]).unwrap();
		assert!(approx_eq!(f64, b.probability("c"), 0.5, ulps = 1));
		assert!(approx_eq!(f64, b.probability("d"), 0.5, ulps = 1));
		let a = table.get(&["a".to_owned()]).unwrap();
		assert!(approx_eq!(f64, a.probability("b"), 1.0, ulps = 1));
	}

	#[test]
	fn test_every_distribution_sums_to_one() {
		let words = "the cat and the dog and the bird saw the cat and a dog";
		let words: Vec<&str> = words.split(' ').collect();
		for order in 2..=4 {
			let table = ProbabilityTable::normalize(&counts(order, &words));
			assert!(!table.is_empty());
			for (context, distribution) in table.iter() {
				assert_eq!(context.arity(), order - 1);
				assert!(
					approx_eq!(f64, distribution.sum(), 1.0, epsilon = 1e-9),
					"context {context} sums to {}",
					distribution.sum()
				);
				assert!(distribution.iter().all(|(_, p)| (0.0..=1.0).contains(&p)));
			}
		}
	}

	#[test]
	fn test_normalize_is_idempotent() {
		let table = counts(3, &["to", "be", "or", "not", "to", "be", "that", "is"]);
		let first = ProbabilityTable::normalize(&table);
		let second = ProbabilityTable::normalize(&table);

		assert_eq!(first, second);
		assert_eq!(first.len(), table.len());
	}

	#[test]
	fn test_normalize_empty_counts() {
		let table = ProbabilityTable::normalize(&CountTable::new(4).unwrap());
		assert!(table.is_empty());
		assert_eq!(table, ProbabilityTable::empty(4));
	}

	#[test]
	fn test_top_k() {
		let table = ProbabilityTable::normalize(&counts(2, &["to", "be", "to", "be", "to", "go"]));
		let top = table.top_k(&Context::from(["to"]), 5);

		assert_eq!(top.len(), 2);
		assert_eq!(top[0].0, "be");
		assert!(approx_eq!(f64, top[0].1, 2.0 / 3.0, epsilon = 1e-12));
		assert!(table.top_k(&Context::from(["unknown"]), 5).is_empty());
	}
}
