use std::collections::BTreeMap;

use rand::Rng;

use super::state::State;

/// Conditional distribution of the next token for one context.
///
/// Conceptually, this is a node in a Markov chain whose outgoing edges
/// are weighted by their probability.
///
/// ## Invariants
/// - Every probability lies in `[0, 1]`
/// - Probabilities sum to 1.0 up to floating-point rounding
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Distribution {
	/// Example: { "be" => 0.75, "the" => 0.25 }
	probabilities: BTreeMap<String, f64>,
}

impl Distribution {
	/// Derives the distribution from raw counts (`count / total`).
	///
	/// Returns `None` if the state has no occurrences at all.
	pub(crate) fn from_state(state: &State) -> Option<Self> {
		let total = state.total();
		if total == 0 {
			return None;
		}

		let probabilities = state
			.transitions()
			.map(|(token, occurrence)| (token.to_owned(), occurrence as f64 / total as f64))
			.collect();
		Some(Self { probabilities })
	}

	/// Probability of `token` (0.0 if never observed).
	pub fn probability(&self, token: &str) -> f64 {
		self.probabilities.get(token).copied().unwrap_or(0.0)
	}

	/// Sum of all stored probabilities.
	pub fn sum(&self) -> f64 {
		self.probabilities.values().sum()
	}

	pub fn len(&self) -> usize {
		self.probabilities.len()
	}

	pub fn is_empty(&self) -> bool {
		self.probabilities.is_empty()
	}

	/// Iterates over `(token, probability)` pairs in token order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
		self.probabilities.iter().map(|(token, p)| (token.as_str(), *p))
	}

	/// Returns the `k` most likely tokens, most likely first.
	///
	/// Ties are broken by token order.
	pub fn top_k(&self, k: usize) -> Vec<(&str, f64)> {
		let mut entries: Vec<(&str, f64)> = self.iter().collect();
		entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
		entries.truncate(k);
		entries
	}

	/// Draws one token using weighted random sampling.
	///
	/// The draw is taken in `[0, sum)` rather than `[0, 1)`, so rounding
	/// drift in the stored probabilities is absorbed.
	///
	/// This method performs:
	/// - an O(n) scan over the probabilities
	/// - a cumulative subtraction to select a bucket
	///
	/// Returns `None` if the distribution is empty.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		let total = self.sum();
		if self.is_empty() || total <= 0.0 {
			return None;
		}

		let mut r = rng.random_range(0.0..total);

		let mut fallback: Option<&str> = None;
		for (token, p) in self.iter() {
			if r < p {
				return Some(token);
			}
			r -= p;
			fallback = Some(token);
		}

		// Only reached when rounding pushes `r` past the last bucket
		fallback
	}
}
