use std::borrow::Borrow;
use std::fmt;

use super::tokenizer::preprocess;

/// An ordered, fixed-length sequence of tokens used as a lookup key.
///
/// For a model of order `n`, contexts hold `n - 1` tokens. Order matters:
/// `(to, be)` and `(be, to)` are distinct keys.
///
/// # Invariants
/// - Two contexts are equal iff their tokens are equal and in the same order
/// - Hashing and equality are those of the underlying `[String]`, so tables
///   keyed by `Context` can be queried with a borrowed token slice
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Context(Vec<String>);

impl Context {
	/// Creates a context from already normalized tokens.
	pub fn new(tokens: Vec<String>) -> Self {
		Self(tokens)
	}

	/// Builds a context from raw text, normalized with the tokenizer.
	///
	/// `"To be, or"` gives `(to, be, or)`.
	pub fn from_text(text: &str) -> Self {
		Self(preprocess(text))
	}

	/// Number of tokens in this context.
	pub fn arity(&self) -> usize {
		self.0.len()
	}

	pub fn tokens(&self) -> &[String] {
		&self.0
	}
}

impl Borrow<[String]> for Context {
	fn borrow(&self) -> &[String] {
		&self.0
	}
}

impl From<Vec<String>> for Context {
	fn from(tokens: Vec<String>) -> Self {
		Self(tokens)
	}
}

impl From<&[&str]> for Context {
	fn from(tokens: &[&str]) -> Self {
		Self(tokens.iter().map(|t| (*t).to_owned()).collect())
	}
}

impl<const N: usize> From<[&str; N]> for Context {
	fn from(tokens: [&str; N]) -> Self {
		Self(tokens.iter().map(|t| (*t).to_owned()).collect())
	}
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({})", self.0.join(", "))
	}
}
