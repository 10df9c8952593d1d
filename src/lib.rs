// Reusable library API — the layout pipeline plus the embedded dataset
pub mod errors;
pub mod generator;
pub mod grid;
pub mod log;
pub mod normalize;
pub mod placement;
pub mod puzzle;
pub mod reveal;
pub mod word_list;
