//! 7-bag randomizer integration tests.

use std::collections::HashMap;

use tui_blockfall::core::PieceBag;
use tui_blockfall::types::PieceKind;

#[test]
fn every_window_of_seven_is_a_permutation() {
    let mut bag = PieceBag::new(97);
    for round in 0..10 {
        let mut seen: HashMap<PieceKind, usize> = HashMap::new();
        for _ in 0..7 {
            *seen.entry(bag.draw()).or_default() += 1;
        }
        assert_eq!(seen.len(), 7, "round {} missed a kind", round);
        assert!(seen.values().all(|&n| n == 1));
    }
}

#[test]
fn no_kind_repeats_more_than_twice_in_a_row() {
    // A bag boundary can produce at most one immediate repeat.
    let mut bag = PieceBag::new(123);
    let drawn: Vec<PieceKind> = (0..7 * 20).map(|_| bag.draw()).collect();

    let mut run = 1;
    for pair in drawn.windows(2) {
        run = if pair[0] == pair[1] { run + 1 } else { 1 };
        assert!(run <= 2, "kind {:?} appeared {} times in a row", pair[0], run);
    }
}

#[test]
fn peek_then_draw_agree() {
    let mut bag = PieceBag::new(55555);
    for _ in 0..30 {
        let peeked = bag.peek();
        assert_eq!(bag.draw(), peeked);
    }
}

#[test]
fn preview_leaves_the_live_bag_untouched() {
    let bag = PieceBag::new(8);
    let upcoming = bag.preview(14);
    assert_eq!(upcoming.len(), 14);

    // Draining the real bag reproduces the preview exactly.
    let mut live = bag;
    for expected in upcoming {
        assert_eq!(live.draw(), expected);
    }
}

#[test]
fn reset_starts_a_fresh_bag() {
    let mut bag = PieceBag::new(404);
    for _ in 0..4 {
        bag.draw();
    }
    bag.reset();

    let mut seen: HashMap<PieceKind, usize> = HashMap::new();
    for _ in 0..7 {
        *seen.entry(bag.draw()).or_default() += 1;
    }
    assert_eq!(seen.len(), 7);
}

#[test]
fn seeded_bags_are_reproducible() {
    let mut a = PieceBag::new(2468);
    let mut b = PieceBag::new(2468);
    for _ in 0..35 {
        assert_eq!(a.draw(), b.draw());
    }
}
