//! The placement search engine: greedy word-by-word crossword layout.
//!
//! Words are normalized to display form, sorted longest first (stable for
//! equal lengths), and committed one at a time. Each word after the first is
//! anchored on the best valid crossing with the letters already on the grid;
//! a word with no valid crossing anywhere is dropped two rows below the
//! current extents instead. Greedy longest-first placement approximates a
//! dense, readable crossword without backtracking, which is plenty for the
//! handful of short words a puzzle uses.
//!
//! # Determinism
//!
//! Identical (word list, seed) input always produces identical output:
//!
//! - the length sort is stable, so equal-length words keep their order;
//! - candidates are enumerated in a fixed order (word index outer, occupied
//!   cells in insertion order inner, horizontal before vertical) and only a
//!   strictly higher overlap replaces the incumbent, so ties resolve to the
//!   first candidate seen;
//! - the reveal sample comes from the generator's own seeded RNG, the only
//!   randomness in the pipeline.
//!
//! # Examples
//!
//! ```
//! use crucigrama::generator::Generator;
//!
//! let words: Vec<String> = ["gato", "tesoro"].iter().map(|s| s.to_string()).collect();
//! let layout = Generator::new(42).generate(&words)?;
//!
//! assert_eq!(layout.placements.len(), 2);
//! // The longest word seeds the grid horizontally at the origin
//! assert_eq!(layout.placements[0].word, "TESORO");
//! assert_eq!((layout.placements[0].row, layout.placements[0].col), (0, 0));
//! # Ok::<(), crucigrama::errors::GenerateError>(())
//! ```

use std::cmp::Reverse;
use std::collections::HashSet;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::GenerateError;
use crate::grid::{Coord, Grid};
use crate::normalize;
use crate::placement::{Direction, Placement};
use crate::reveal;

/// Result of one generation call: the populated grid, the placements in
/// commit order, and the sampled clue squares.
#[derive(Debug, Clone)]
pub struct Layout {
    pub grid: Grid,
    pub placements: Vec<Placement>,
    pub reveals: HashSet<Coord>,
}

/// Crossword generator holding the seeded random source.
///
/// The RNG is instance-scoped and threads through successive [`generate`]
/// calls, so a fixed seed reproduces a whole batch of puzzles, not just the
/// first one.
///
/// [`generate`]: Generator::generate
#[derive(Debug)]
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build a layout from `words`.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if `words` is empty.
    /// - `ConflictingPlacement` only if the search committed a candidate it
    ///   never validated, which would be a bug in this module.
    pub fn generate(&mut self, words: &[String]) -> Result<Layout, GenerateError> {
        if words.is_empty() {
            return Err(GenerateError::EmptyInput);
        }

        // Longest first; sort_by_key is stable, so equal lengths keep their
        // original relative order.
        let mut normalized: Vec<String> =
            words.iter().map(|w| normalize::display_form(w)).collect();
        normalized.sort_by_key(|w| Reverse(w.chars().count()));

        let mut grid = Grid::new();
        let mut placements: Vec<Placement> = Vec::with_capacity(normalized.len());

        for word in normalized {
            // The first word never has a crossing (empty grid), so it takes
            // the fallback anchor — the origin — horizontally.
            let (anchor, direction) = match best_candidate(&grid, &word) {
                Some((anchor, direction, overlap)) => {
                    debug!("placing \"{word}\" at {anchor:?} {direction:?} (overlap {overlap})");
                    (anchor, direction)
                }
                None => {
                    let anchor = grid.fallback_anchor();
                    debug!("no crossing for \"{word}\"; fallback at {anchor:?}");
                    (anchor, Direction::Horizontal)
                }
            };

            grid.commit(&word, anchor, direction)?;
            placements.push(Placement {
                word,
                row: anchor.0,
                col: anchor.1,
                direction,
                clue_number: placements.len() + 1,
            });
        }

        let reveals = reveal::select_reveals(&grid, &mut self.rng);

        Ok(Layout {
            grid,
            placements,
            reveals,
        })
    }
}

/// Find the best valid crossing for `word` against the current grid.
///
/// Enumerates every word index against every occupied cell holding that
/// letter, trying a horizontal and a vertical anchor through the match. Only
/// a strictly higher overlap count replaces the current best, so the first
/// candidate seen wins ties. Returns `None` when no valid crossing exists.
fn best_candidate(grid: &Grid, word: &str) -> Option<(Coord, Direction, usize)> {
    let mut best: Option<(Coord, Direction, usize)> = None;

    for (i, letter) in word.chars().enumerate() {
        let offset = i as i32;
        for ((row, col), existing) in grid.occupied() {
            if existing != letter {
                continue;
            }
            // Anchor so that letter i of the word lands on this cell
            let candidates = [
                ((row, col - offset), Direction::Horizontal),
                ((row - offset, col), Direction::Vertical),
            ];
            for (anchor, direction) in candidates {
                if let Some(overlap) = grid.can_place(word, anchor, direction) {
                    let beats_best = match best {
                        Some((_, _, best_overlap)) => overlap > best_overlap,
                        None => true,
                    };
                    if beats_best {
                        best = Some((anchor, direction, overlap));
                    }
                }
            }
        }
    }

    best
}
