//! `reveal` — Seeded sampling of clue squares
//!
//! After all words are committed, a handful of letter cells get revealed to
//! the solver; the rest stay hidden. The sample is drawn without replacement
//! from the occupied coordinates in insertion order, using the generator's
//! own seeded RNG, so the whole pipeline stays reproducible per seed.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Coord, Grid};

/// How many letter cells are revealed as clue squares (fewer if the grid is
/// smaller than this).
pub const MAX_REVEALS: usize = 4;

/// Draw `min(MAX_REVEALS, occupied)` distinct occupied coordinates.
pub fn select_reveals<R: Rng>(grid: &Grid, rng: &mut R) -> HashSet<Coord> {
    let coords: Vec<Coord> = grid.occupied().map(|(coord, _)| coord).collect();
    let amount = coords.len().min(MAX_REVEALS);
    coords.choose_multiple(rng, amount).copied().collect()
}
