//! 7-bag piece randomizer.
//!
//! Pieces are drawn from a shuffled bag of all seven kinds; when the bag runs
//! out a fresh shuffle is generated. Every kind therefore appears exactly once
//! per seven draws, which bounds droughts and floods.
//!
//! Shuffling uses a small seeded LCG so games are reproducible.

use arrayvec::ArrayVec;

use tui_blockfall_types::PieceKind;

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        // A zero state would produce a degenerate sequence.
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Maximum lookahead supported by [`PieceBag::preview`].
pub const PREVIEW_MAX: usize = 14;

/// The 7-bag generator. Starts empty; the first draw fills it.
#[derive(Debug, Clone)]
pub struct PieceBag {
    bag: ArrayVec<PieceKind, 7>,
    cursor: usize,
    rng: Lcg,
}

impl PieceBag {
    pub fn new(seed: u32) -> Self {
        Self {
            bag: ArrayVec::new(),
            cursor: 0,
            rng: Lcg::new(seed),
        }
    }

    fn refill(&mut self) {
        self.bag.clear();
        self.bag.extend(PieceKind::ALL);
        self.rng.shuffle(&mut self.bag);
        self.cursor = 0;
    }

    /// Draw the next piece, regenerating the bag when exhausted.
    pub fn draw(&mut self) -> PieceKind {
        if self.cursor >= self.bag.len() {
            self.refill();
        }
        let kind = self.bag[self.cursor];
        self.cursor += 1;
        kind
    }

    /// The piece the next [`PieceBag::draw`] will yield, without consuming it.
    pub fn peek(&self) -> PieceKind {
        self.preview(1)[0]
    }

    /// The next `count` pieces (at most [`PREVIEW_MAX`]) without consuming
    /// them. Bag exhaustion and regeneration are simulated against a scratch
    /// copy, so the live bag and RNG are untouched.
    pub fn preview(&self, count: usize) -> ArrayVec<PieceKind, PREVIEW_MAX> {
        let mut scratch = self.clone();
        let mut out = ArrayVec::new();
        for _ in 0..count.min(PREVIEW_MAX) {
            out.push(scratch.draw());
        }
        out
    }

    /// Empty the bag so the next draw generates a fresh shuffle.
    pub fn reset(&mut self) {
        self.bag.clear();
        self.cursor = 0;
    }

    /// Current RNG state, usable as a seed for a follow-up game.
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}
