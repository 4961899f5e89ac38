//! Explicit, from-scratch SHA-256
//!
//! This crate implements the SHA-256 hash function as a pipeline of four
//! small, explicit components rather than as a single opaque routine.
//! Each stage of the algorithm — constant derivation, message padding,
//! word-schedule expansion, and block compression — lives in its own
//! module with its own contract, so the data flow can be read directly
//! from the module boundaries:
//!
//! ```text
//! text -> BitString -> pad -> [Block]
//!     -> (per block) expand -> [u32; 64] -> process_block -> State
//!     -> hex digest
//! ```
//!
//! The focus is on **clarity, predictability, and auditability** rather
//! than throughput. The implementation is dependency-free, every 32-bit
//! operation wraps explicitly, and block chaining is expressed as a pure
//! state-passing fold with no hidden mutable state.
//!
//! # Module overview
//!
//! - `constants`
//!   The SHA-256 round constants and initial hash values, both as verified
//!   literal tables (used by the hashing pipeline) and as the derivation
//!   procedure that produces them from the fractional parts of cube and
//!   square roots of the first primes. The derivation is kept public so
//!   the tables stay reproducible and testable.
//!
//! - `message`
//!   Input encoding and padding. Text is mapped character-by-character to
//!   a byte stream (code points ≥ 128 are substituted with `?`), then cut
//!   into 512-bit blocks: up to 448 bits of data, a terminator and zero
//!   padding when the chunk falls short, and the total message bit length
//!   in the final 64 bits of every block.
//!
//! - `schedule`
//!   Per-block expansion of the sixteen input words into the sixty-four
//!   words consumed by the compression rounds, via the σ0/σ1 mixing
//!   recurrence.
//!
//! - `compress`
//!   The 64-round compression function, the feed-forward that folds each
//!   block into the running hash state, and the top-level `sha256` driver
//!   that chains blocks in order and serializes the digest as 64
//!   lowercase hex characters.
//!
//! # Fidelity note
//!
//! The padder reproduces the chunking rule of the reference this crate
//! was built against, which differs from the RFC 6234 rule for messages
//! longer than 55 bytes (see `message` for the exact rule). Digests for
//! inputs of at most 55 bytes are bit-identical to standard SHA-256;
//! longer inputs are not, and the test suite pins both behaviors.
//!
//! This crate is not a replacement for an audited, full-featured SHA-256
//! library; it is a small, controlled implementation whose every step is
//! visible.

pub mod compress;
pub mod constants;
pub mod message;
pub mod schedule;

/// Re-export of the one-shot hashing entry point.
pub use compress::core::sha256;
