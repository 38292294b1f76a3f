//! Top-level module for the word-level Markov generation system.
//!
//! This module provides:
//! - Text normalization (`tokenizer`)
//! - Context keys (`Context`)
//! - Per-order count and probability tables (`CountTable`, `ProbabilityTable`)
//! - Fixed-order and multi-order models (`NGramModel`, `MultiGramModel`)
//! - Sampling with a fixed fallback vocabulary (`Sampler`)
//! - A high-level generation interface (`Generator`)

/// Text normalization into word tokens.
pub mod tokenizer;

/// Ordered, fixed-arity token sequence used as a table key.
pub mod context;

/// Observed continuations of a single context.
///
/// Tracks occurrence counts per next token.
mod state;

/// Raw `(context -> next token)` counts for one order.
pub mod count_table;

/// Normalized next-token distribution of one context, with weighted sampling.
pub mod distribution;

/// Per-context probabilities derived from a count table.
pub mod probability_table;

/// Weighted draw over a probability table, with fallback for unseen contexts.
pub mod sampler;

/// Fixed-order n-gram model (`n >= 2`).
///
/// Holds the count table and the probability table of one order.
pub mod ngram_model;

/// Multi-order model composed of independent `NGramModel`s.
///
/// Trains every order from raw documents and reports on the result.
pub mod multigram_model;

/// High-level interface for generating word sequences.
pub mod generator;

pub use context::Context;
pub use generator::Generator;
pub use multigram_model::{MultiGramModel, TrainingReport};
pub use ngram_model::NGramModel;
pub use sampler::{DEFAULT_FALLBACK_WORDS, Sampler};
pub use state::State;
