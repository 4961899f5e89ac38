use shacore::compress::{process_block, sha256, to_hex};
use shacore::constants::H256_INIT;
use shacore::message::{BitString, pad};
use shacore::schedule::expand;

// -------------------------------------------------------
// BLOCK CHAINING
// -------------------------------------------------------

// 60 bytes pads into two blocks. Folding them by hand, one
// process_block call at a time, must reproduce the one-shot digest:
// the state entering block 2 is exactly the state leaving block 1,
// with no reinitialization in between.
#[test]
fn two_block_message_chains_state_exactly() {
    let input = "a".repeat(60);
    let blocks = pad(&BitString::from_text(&input));

    assert_eq!(blocks.len(), 2);

    let after_first = process_block(&H256_INIT, &expand(&blocks[0]));
    let after_second = process_block(&after_first, &expand(&blocks[1]));

    assert_ne!(after_first, H256_INIT);
    assert_eq!(to_hex(&after_second), sha256(&input));
}

#[test]
fn single_block_message_folds_once() {
    let input = "abc";
    let blocks = pad(&BitString::from_text(input));

    assert_eq!(blocks.len(), 1);

    let state = process_block(&H256_INIT, &expand(&blocks[0]));

    assert_eq!(to_hex(&state), sha256(input));
}

// process_block is a pure fold step: same state and schedule in, same
// state out, and its inputs are left untouched.
#[test]
fn process_block_is_pure() {
    let block = pad(&BitString::from_text("purity")).remove(0);
    let w = expand(&block);

    let first = process_block(&H256_INIT, &w);
    let second = process_block(&H256_INIT, &w);

    assert_eq!(first, second);
}
