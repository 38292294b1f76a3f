use std::collections::BTreeMap;

/// Observed continuations of a single context.
///
/// A `State` is one row of a count table: it maps every token seen right
/// after its context to the number of times it was seen there.
///
/// ## Invariants
/// - Each stored count is strictly positive
/// - A state only exists once a first transition has been recorded
///
/// Tokens are kept ordered so iteration (and therefore seeded sampling)
/// is reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
	/// Example: { "be" => 42, "the" => 3 }
	transitions: BTreeMap<String, usize>,
}

impl State {
	/// Records one occurrence of `next` after this state's context.
	pub(crate) fn add_transition(&mut self, next: &str) {
		if let Some(occurrence) = self.transitions.get_mut(next) {
			*occurrence += 1;
		} else {
			self.transitions.insert(next.to_owned(), 1);
		}
	}

	/// Number of times `token` followed this context (0 if never).
	pub fn count(&self, token: &str) -> usize {
		self.transitions.get(token).copied().unwrap_or(0)
	}

	/// Sum of all continuation counts.
	pub fn total(&self) -> usize {
		self.transitions.values().sum()
	}

	/// Number of distinct continuations.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Iterates over `(token, count)` pairs in token order.
	pub fn transitions(&self) -> impl Iterator<Item = (&str, usize)> {
		self.transitions.iter().map(|(token, occurrence)| (token.as_str(), *occurrence))
	}
}
