//! Message-schedule expansion
//!
//! For each block, the sixteen input words `w[0..16]` are copied directly
//! and the remaining forty-eight are derived by the recurrence
//!
//! ```text
//! w[t] = w[t-16] + σ0(w[t-15]) + w[t-7] + σ1(w[t-2])   (mod 2³²)
//! ```
//!
//! for `t` in `16..64`. All arithmetic wraps; there are no failure modes.

use super::computations::{small_sigma0, small_sigma1};
use crate::message::Block;

/// Expands a block's sixteen words into the full 64-word schedule.
///
/// The schedule is scoped to one block: it depends only on the block's
/// contents, never on the running hash state, and is discarded once the
/// block has been compressed.
pub fn expand(block: &Block) -> [u32; 64] {
    let mut w = [0u32; 64];
    w[..16].copy_from_slice(block);

    for t in 16..64 {
        w[t] = w[t - 16]
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma1(w[t - 2]));
    }

    w
}
