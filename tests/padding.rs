use shacore::message::{BitString, Block, pad};

fn blocks_for(text: &str) -> Vec<Block> {
    pad(&BitString::from_text(text))
}

// -------------------------------------------------------
// 1. BIT STRING ENCODING
// -------------------------------------------------------

#[test]
fn bit_string_encodes_ascii_bytes() {
    let bits = BitString::from_text("abc");

    assert_eq!(bits.as_bytes(), b"abc");
    assert_eq!(bits.bit_len(), 24);
}

#[test]
fn bit_string_substitutes_non_ascii() {
    let bits = BitString::from_text("é€a");

    assert_eq!(bits.as_bytes(), b"??a");
}

#[test]
fn empty_bit_string() {
    let bits = BitString::from_text("");

    assert!(bits.as_bytes().is_empty());
    assert_eq!(bits.bit_len(), 0);
}

// -------------------------------------------------------
// 2. SHORT MESSAGES (STANDARD PADDING SHAPE)
// -------------------------------------------------------

#[test]
fn empty_input_yields_canonical_padding_block() {
    let blocks = blocks_for("");

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0][0], 0x8000_0000);
    assert!(blocks[0][1..].iter().all(|&w| w == 0));
}

#[test]
fn abc_block_layout() {
    let blocks = blocks_for("abc");

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0][0], 0x6162_6380);
    assert!(blocks[0][1..15].iter().all(|&w| w == 0));
    assert_eq!(blocks[0][15], 24);
}

#[test]
fn fifty_five_bytes_still_fit_one_block() {
    let blocks = blocks_for(&"a".repeat(55));

    assert_eq!(blocks.len(), 1);
    assert!(blocks[0][..13].iter().all(|&w| w == 0x6161_6161));
    // Terminator lands in the last data byte.
    assert_eq!(blocks[0][13], 0x6161_6180);
    assert_eq!(blocks[0][14], 0);
    assert_eq!(blocks[0][15], 440);
}

// -------------------------------------------------------
// 3. THE 448-BIT BOUNDARY (PRESERVED DIVERGENCE)
// -------------------------------------------------------

// A chunk landing at exactly 448 bits is emitted without the terminator
// bit. This departs from RFC 6234, which would start a second block;
// the behavior is preserved from the reference on purpose.
#[test]
fn exact_448_bit_chunk_is_emitted_without_terminator() {
    let blocks = blocks_for(&"a".repeat(56));

    assert_eq!(blocks.len(), 1);
    assert!(blocks[0][..14].iter().all(|&w| w == 0x6161_6161));
    assert_eq!(blocks[0][14], 0);
    assert_eq!(blocks[0][15], 448);
}

// Every block carries the total message length, not just the last one.
#[test]
fn fifty_seven_bytes_spill_into_a_padded_second_block() {
    let blocks = blocks_for(&"a".repeat(57));

    assert_eq!(blocks.len(), 2);

    assert!(blocks[0][..14].iter().all(|&w| w == 0x6161_6161));
    assert_eq!(blocks[0][15], 456);

    assert_eq!(blocks[1][0], 0x6180_0000);
    assert!(blocks[1][1..15].iter().all(|&w| w == 0));
    assert_eq!(blocks[1][15], 456);
}

// -------------------------------------------------------
// 4. BLOCK COUNTS
// -------------------------------------------------------

#[test]
fn block_counts_follow_448_bit_chunking() {
    for (len, expected) in [(0, 1), (1, 1), (55, 1), (56, 1), (57, 2), (112, 2), (113, 3)] {
        let blocks = blocks_for(&"a".repeat(len));

        assert_eq!(blocks.len(), expected, "wrong block count for {len} bytes");
    }
}
