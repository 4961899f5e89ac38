//! The compression engine.
//!
//! Runs the 64 SHA-256 rounds over a block's expanded words, folds the
//! result into the running hash state, and drives the full pipeline from
//! input text to hex digest.

pub mod computations;
pub mod core;

pub use core::{State, process_block, sha256, to_hex};
