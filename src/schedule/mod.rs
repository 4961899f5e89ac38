//! Word-schedule expansion.
//!
//! Expands each block's sixteen input words into the sixty-four words the
//! compression rounds consume.

pub mod computations;
pub mod core;

pub use core::expand;
