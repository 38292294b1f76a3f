use std::collections::HashMap;

use super::context::Context;
use super::state::State;
use crate::error::{Error, Result};

/// Raw `(context -> next token)` counts for one n-gram order.
///
/// # Responsibilities
/// - Slide a window of `n` tokens over training sequences
/// - Count, for each `(n-1)`-token context, every following token
///
/// # Invariants
/// - `n` is always >= 2
/// - Every key has exactly `n - 1` tokens
/// - A context is present only if it was observed with some next token
/// - Counts only grow: the table is append-only while training
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountTable {
	/// The order of the table (number of tokens in the n-gram)
	n: usize,

	/// Mapping from a context (length n-1) to its observed continuations
	states: HashMap<Context, State>,
}

impl CountTable {
	/// Creates an empty count table of order `n`.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `n < 2`.
	pub fn new(n: usize) -> Result<Self> {
		if n < 2 {
			return Err(Error::invalid_argument("order", format!("must be >= 2, got {n}")));
		}
		Ok(Self { n, states: HashMap::new() })
	}

	pub fn order(&self) -> usize {
		self.n
	}

	/// Accumulates the n-grams of `tokens` into the table.
	///
	/// For every window position `i` with `i + n <= tokens.len()`, the
	/// context is `tokens[i..i + n - 1]` and the next token is
	/// `tokens[i + n - 1]`.
	///
	/// # Notes
	/// - Never resets: calling it twice on the same input doubles the counts.
	/// - A sequence shorter than `n` leaves the table untouched.
	pub fn accumulate(&mut self, tokens: &[String]) {
		for window in tokens.windows(self.n) {
			let (context, next) = window.split_at(self.n - 1);
			let next = &next[0];

			// Explicit lookup-or-insert, no allocation for known contexts
			if let Some(state) = self.states.get_mut(context) {
				state.add_transition(next);
			} else {
				let mut state = State::default();
				state.add_transition(next);
				self.states.insert(Context::new(context.to_vec()), state);
			}
		}
	}

	/// Returns the continuations observed after `context`, if any.
	pub fn get(&self, context: &[String]) -> Option<&State> {
		self.states.get(context)
	}

	/// Number of times `next` followed `context`.
	pub fn count(&self, context: &Context, next: &str) -> usize {
		self.get(context.tokens()).map_or(0, |state| state.count(next))
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Total number of n-grams accumulated so far.
	pub fn ngram_count(&self) -> usize {
		self.states.values().map(State::total).sum()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&Context, &State)> {
		self.states.iter()
	}
}
