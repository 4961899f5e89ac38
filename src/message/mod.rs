//! Input encoding and message padding.
//!
//! Turns input text into the ordered sequence of 512-bit blocks consumed
//! by the compression engine. See [`core::pad`] for the exact chunking
//! rule, including where it deliberately departs from RFC 6234.

pub mod core;

pub use core::{BitString, Block, pad};
