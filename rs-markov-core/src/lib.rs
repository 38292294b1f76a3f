//! Word-level Markov text generation library.
//!
//! This crate provides a variable-order n-gram system including:
//! - Tokenization of raw documents into lowercase word tokens
//! - Independent count and probability tables per order (2, 3, 4 by default)
//! - Weighted sampling with a fixed fallback vocabulary for unseen contexts
//! - Seeded or entropy-backed generation of word sequences
//! - Helpers to read training documents from a folder

/// Core n-gram models and generation logic.
pub mod model;

/// Model and sampling configuration.
pub mod config;

/// Crate error type.
pub mod error;

/// I/O utilities (corpus loading, path helpers).
pub mod io;

pub use config::ModelConfig;
pub use error::{Error, Result};
pub use model::{Context, Generator, MultiGramModel};
