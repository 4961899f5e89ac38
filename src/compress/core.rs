//! SHA-256 compression and the hashing pipeline
//!
//! This module implements the 64-round compression function and the
//! top-level driver that chains it across blocks.
//!
//! Chaining is an explicit fold: [`process_block`] is a pure function
//! `(state, schedule) -> state`, and the driver threads the state through
//! the blocks in input order. The state entering block *i+1* is exactly
//! the state leaving block *i*; nothing else is carried between blocks.

use super::computations::{big_sigma0, big_sigma1, ch, maj};
use crate::constants::{H256_INIT, K256};
use crate::message::{BitString, pad};
use crate::schedule::expand;

/// The running hash state: eight 32-bit registers `a..h`.
pub type State = [u32; 8];

/// Compresses one block's expanded schedule into the hash state.
///
/// Runs the 64 rounds over `w`, mixing in the shared round constants,
/// then adds each register back onto its pre-round value. The
/// feed-forward is part of the contract: without it the construction is
/// not SHA-256.
///
/// # Parameters
/// - `state`: the hash state entering this block
/// - `w`: the block's 64-word schedule
///
/// # Returns
/// - The state to feed into the next block, or to serialize as the
///   digest after the last one.
pub fn process_block(state: &State, w: &[u32; 64]) -> State {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for t in 0..64 {
        let s1 = big_sigma1(e);
        let t1 = h
            .wrapping_add(s1)
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K256[t])
            .wrapping_add(w[t]);

        let s0 = big_sigma0(a);
        let t2 = s0.wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    [
        state[0].wrapping_add(a),
        state[1].wrapping_add(b),
        state[2].wrapping_add(c),
        state[3].wrapping_add(d),
        state[4].wrapping_add(e),
        state[5].wrapping_add(f),
        state[6].wrapping_add(g),
        state[7].wrapping_add(h),
    ]
}

/// Serializes a hash state as 64 lowercase hex characters.
///
/// Each register is printed big-endian, most significant byte first, in
/// register order `a..h`.
pub fn to_hex(state: &State) -> String {
    state.iter().map(|word| format!("{word:08x}")).collect()
}

/// Computes the digest of `input`.
///
/// The full pipeline: encode the text (code points ≥ 128 become `?`),
/// pad into blocks, expand and compress each block in order starting
/// from the initial hash values, and serialize the final state.
///
/// # Notes
/// - Total and deterministic for every input, the empty string included.
/// - Inputs of at most 55 bytes hash identically to standard SHA-256;
///   longer inputs follow the preserved padding rule described in the
///   `message` module.
pub fn sha256(input: &str) -> String {
    let bits = BitString::from_text(input);

    let digest = pad(&bits)
        .iter()
        .fold(H256_INIT, |state, block| {
            process_block(&state, &expand(block))
        });

    to_hex(&digest)
}
