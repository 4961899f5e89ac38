//! Bit string construction and 512-bit block padding
//!
//! Input text is first encoded into a bit string: every character with a
//! code point below 128 contributes its 8-bit value, and anything else is
//! substituted with `0x3F` (`?`). Characters always contribute whole
//! bytes, so the bit string is stored as bytes and all padding operates
//! byte-aligned (the terminator bit is `0x80`).
//!
//! The padder then cuts the bit string into 512-bit blocks of sixteen
//! big-endian 32-bit words. Each block holds up to 448 bits of data
//! followed by the 64-bit big-endian **total** message length in bits.
//! When a chunk falls short of 448 bits it is completed with a `1` bit
//! and zeros.
//!
//! # Divergence from RFC 6234
//!
//! This chunking rule is preserved bit-for-bit from the reference this
//! crate reimplements, and it is not the standard SHA-256 rule:
//!
//! - every block carries the total length field, not just the last one,
//!   so blocks hold 448 data bits instead of 512;
//! - a chunk landing at exactly 448 bits is emitted as-is, with no
//!   terminator bit.
//!
//! For messages of at most 55 bytes a single block is produced and both
//! rules coincide, so short-message digests match standard SHA-256
//! exactly. Longer messages diverge. The tests pin both the agreement
//! and the divergence.

/// One 512-bit block: sixteen big-endian 32-bit words.
pub type Block = [u32; 16];

/// Data capacity of a block in bytes (448 bits).
const DATA_BYTES: usize = 56;

/// A message encoded as a sequence of bits, eight per input character.
///
/// Immutable once built; consumed only by [`pad`].
pub struct BitString {
    bytes: Vec<u8>,
}

impl BitString {
    /// Encodes `text` character by character.
    ///
    /// Code points below 128 map to their byte value; everything else
    /// maps to `0x3F` (`?`).
    pub fn from_text(text: &str) -> Self {
        let bytes = text
            .chars()
            .map(|c| if (c as u32) < 128 { c as u8 } else { 0x3F })
            .collect();

        Self { bytes }
    }

    /// Total length in bits.
    pub fn bit_len(&self) -> u64 {
        (self.bytes.len() as u64) << 3
    }

    /// The underlying byte stream.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Packs 64 padded bytes into sixteen big-endian words.
fn to_words(raw: &[u8; 64]) -> Block {
    let mut words = [0u32; 16];

    for (slot, chunk) in words.iter_mut().zip(raw.chunks_exact(4)) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    words
}

/// Pads a bit string into its ordered sequence of 512-bit blocks.
///
/// Repeatedly consumes up to 448 bits of the remaining input as a chunk.
/// A chunk strictly shorter than 448 bits is completed with a `1` bit and
/// zeros; a chunk of exactly 448 bits is taken as-is. The total message
/// bit length is appended big-endian to every chunk to complete 512 bits.
///
/// # Returns
/// - At least one block, in input order. Empty input yields the single
///   canonical padding block (terminator bit, zeros, zero length), so the
///   empty-message digest matches standard SHA-256.
///
/// # Notes
/// - Block order is processing order: the compression engine must fold
///   the blocks exactly in this sequence.
pub fn pad(bits: &BitString) -> Vec<Block> {
    let total_bits = bits.bit_len();
    let mut rest = bits.as_bytes();
    let mut blocks = Vec::with_capacity(rest.len() / DATA_BYTES + 1);

    loop {
        let take = rest.len().min(DATA_BYTES);
        let (chunk, tail) = rest.split_at(take);

        let mut raw = [0u8; 64];
        raw[..take].copy_from_slice(chunk);

        // Terminator and zero fill only when the chunk falls short of
        // 448 bits; an exact 448-bit chunk goes through untouched.
        if take < DATA_BYTES {
            raw[take] = 0x80;
        }

        raw[DATA_BYTES..].copy_from_slice(&total_bits.to_be_bytes());
        blocks.push(to_words(&raw));

        rest = tail;
        if rest.is_empty() {
            break;
        }
    }

    blocks
}
