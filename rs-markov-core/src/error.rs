//! Error type shared by the whole crate.

use thiserror::Error;

/// Result alias used by every fallible operation of the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by model construction and generation.
///
/// Unseen contexts and degenerate corpora are not errors: they are handled
/// by the fallback vocabulary and by empty tables respectively.
#[derive(Debug, Error)]
pub enum Error {
	/// An argument does not satisfy the operation's precondition
	/// (seed arity, order, fallback vocabulary).
	#[error("invalid argument `{arg}`: {msg}")]
	InvalidArgument { arg: &'static str, msg: String },

	/// No tables exist for the requested order.
	#[error("no n-gram model of order {0}")]
	UnknownOrder(usize),

	/// I/O failure while reading corpus documents.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

impl Error {
	pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
	where
		S: Into<String>,
	{
		Self::InvalidArgument { arg, msg: msg.into() }
	}
}
