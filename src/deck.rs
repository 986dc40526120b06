//! Deck controller: the slide navigation state machine.
//!
//! States are the slide indices `[0, total)`. Transitions are `next`
//! (guarded by the upper bound), `prev` (guarded by the lower bound) and
//! `go_to` (jump to any valid index). Every operation is total: requests
//! that would leave the valid range are no-ops, never errors.

use std::num::NonZeroUsize;

// ============================================================================
// TYPES
// ============================================================================

/// Which way the most recent navigation moved.
///
/// Cosmetic only: it picks the sign of the slide-in offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// +1 for forward, -1 for backward.
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Read-only snapshot handed to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckState {
    pub current_index: usize,
    pub direction: Direction,
}

/// Owns the current slide index and navigation direction.
///
/// `Copy` so the pure update layer can take it by value and hand back a
/// new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckController {
    current: usize,
    direction: Direction,
    total: NonZeroUsize,
}

// ============================================================================
// OPERATIONS
// ============================================================================

impl DeckController {
    /// Mount a deck of `total` slides on the first slide.
    pub fn new(total: NonZeroUsize) -> Self {
        DeckController {
            current: 0,
            direction: Direction::Forward,
            total,
        }
    }

    /// Jump to `index`.
    ///
    /// Direction becomes `Forward` iff `index` is past the current slide.
    /// Out-of-range indices are ignored. Returns true if the current slide
    /// changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.total.get() {
            tracing::debug!(index, total = self.total.get(), "ignoring out-of-range jump");
            return false;
        }
        let moved = index != self.current;
        self.direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = index;
        moved
    }

    /// Advance one slide. No-op on the last slide.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        self.direction = Direction::Forward;
        true
    }

    /// Go back one slide. No-op on the first slide.
    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        self.direction = Direction::Backward;
        true
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn total(&self) -> usize {
        self.total.get()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total.get()
    }

    /// Fraction of the deck shown so far, in `(0, 1]`.
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.total.get() as f64
    }

    pub fn state(&self) -> DeckState {
        DeckState {
            current_index: self.current,
            direction: self.direction,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
