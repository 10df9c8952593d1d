//! `placement` — Committed word positions on the grid
//!
//! A [`Placement`] records where one word sits: the anchor of its first
//! letter, its direction, and its 1-based clue number in commit order. The
//! cells a placement covers are derived from anchor + direction + length,
//! never stored.

use serde::Serialize;

use crate::grid::Coord;

/// Orientation of a placed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// The coordinate of the `i`-th letter of a word anchored at `anchor`.
    #[must_use]
    pub fn cell(self, anchor: Coord, i: usize) -> Coord {
        let (row, col) = anchor;
        match self {
            Direction::Horizontal => (row, col + i as i32),
            Direction::Vertical => (row + i as i32, col),
        }
    }
}

/// A committed (word, anchor, direction) assignment. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The word in display form (uppercase, accents stripped).
    pub word: String,
    /// Anchor row of the first letter.
    pub row: i32,
    /// Anchor column of the first letter.
    pub col: i32,
    /// Orientation on the grid.
    pub direction: Direction,
    /// 1-based sequential clue number, assigned in commit order.
    pub clue_number: usize,
}

impl Placement {
    /// Iterate the grid coordinates this placement covers, in letter order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let anchor = (self.row, self.col);
        let dir = self.direction;
        (0..self.word.chars().count()).map(move |i| dir.cell(anchor, i))
    }
}
