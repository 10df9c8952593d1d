//! `grid` — Sparse coordinate→letter store with running extents
//!
//! The grid is a hash map from `(row, col)` to an uppercase letter, plus an
//! explicit insertion-order list of the occupied coordinates. The list is
//! what [`Grid::occupied`] iterates: candidate enumeration in the placement
//! search must be reproducible, and `HashMap` iteration order is not.
//!
//! Two operations matter:
//!
//! - [`Grid::can_place`] — side-effect-free validity + overlap check.
//! - [`Grid::commit`] — the only mutator; writes a word's letters and
//!   updates the bounding box. A letter conflict on commit means the search
//!   skipped validation, which is an internal invariant violation
//!   ([`GenerateError::ConflictingPlacement`]), never a silent overwrite.

use std::collections::HashMap;

use crate::errors::GenerateError;
use crate::placement::Direction;

/// A grid coordinate: (row, col). Rows grow downward, columns rightward;
/// both may go negative as words cross above or left of the first word.
pub type Coord = (i32, i32);

/// Minimal rectangle containing all committed placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extents {
    pub min_row: i32,
    pub max_row: i32,
    pub min_col: i32,
    pub max_col: i32,
}

impl Extents {
    /// Number of rows covered.
    #[must_use]
    pub fn rows(&self) -> usize {
        (self.max_row - self.min_row + 1) as usize
    }

    /// Number of columns covered.
    #[must_use]
    pub fn cols(&self) -> usize {
        (self.max_col - self.min_col + 1) as usize
    }

    fn include(&mut self, (row, col): Coord) {
        self.min_row = self.min_row.min(row);
        self.max_row = self.max_row.max(row);
        self.min_col = self.min_col.min(col);
        self.max_col = self.max_col.max(col);
    }
}

/// Sparse letter grid. Owned by one generation call at a time.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: HashMap<Coord, char>,
    /// Occupied coordinates in first-write order; drives candidate iteration.
    order: Vec<Coord>,
    extents: Option<Extents>,
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The letter at `coord`, if occupied.
    #[must_use]
    pub fn letter_at(&self, coord: Coord) -> Option<char> {
        self.cells.get(&coord).copied()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Occupied coordinates and their letters, in insertion order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.order.iter().map(|&coord| (coord, self.cells[&coord]))
    }

    /// Bounding box over all committed placements; `None` while empty.
    #[must_use]
    pub fn extents(&self) -> Option<Extents> {
        self.extents
    }

    /// Where an unplaceable word goes: two rows below the lowest placed row,
    /// left-aligned with the leftmost column. The origin for an empty grid.
    ///
    /// Known edge case kept from the original logic: a later crossing
    /// placement can grow the extents into a band where an earlier fallback
    /// word already sits, so two fallback words are not strictly guaranteed
    /// disjoint from everything placed after them.
    #[must_use]
    pub fn fallback_anchor(&self) -> Coord {
        match self.extents {
            Some(e) => (e.max_row + 2, e.min_col),
            None => (0, 0),
        }
    }

    /// Check whether `word` fits at `anchor` in `direction`.
    ///
    /// Returns `Some(overlap_count)` iff every cell the word would occupy is
    /// either empty or already holds the matching letter; `None` on any
    /// conflict anywhere along the word. Side-effect free.
    #[must_use]
    pub fn can_place(&self, word: &str, anchor: Coord, direction: Direction) -> Option<usize> {
        let mut overlap = 0;
        for (i, ch) in word.chars().enumerate() {
            match self.letter_at(direction.cell(anchor, i)) {
                Some(existing) if existing == ch => overlap += 1,
                Some(_) => return None,
                None => {}
            }
        }
        Some(overlap)
    }

    /// Write `word` onto the grid and grow the bounding box.
    ///
    /// # Errors
    ///
    /// `ConflictingPlacement` if a cell already holds a different letter.
    /// Callers are expected to have validated with [`Grid::can_place`]; this
    /// error is an internal invariant violation, not a recoverable state.
    pub fn commit(
        &mut self,
        word: &str,
        anchor: Coord,
        direction: Direction,
    ) -> Result<(), GenerateError> {
        for (i, ch) in word.chars().enumerate() {
            let coord = direction.cell(anchor, i);
            match self.cells.get(&coord) {
                Some(&existing) if existing != ch => {
                    return Err(GenerateError::ConflictingPlacement {
                        word: word.to_string(),
                        row: coord.0,
                        col: coord.1,
                        existing,
                        attempted: ch,
                    });
                }
                Some(_) => {} // same letter, already in the order list
                None => {
                    self.cells.insert(coord, ch);
                    self.order.push(coord);
                }
            }
            match &mut self.extents {
                Some(e) => e.include(coord),
                None => {
                    self.extents = Some(Extents {
                        min_row: coord.0,
                        max_row: coord.0,
                        min_col: coord.1,
                        max_col: coord.1,
                    });
                }
            }
        }
        Ok(())
    }
}
