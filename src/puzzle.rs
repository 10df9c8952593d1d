//! `puzzle` — Assembling a finished layout into the delivery record
//!
//! The engine works in unbounded coordinates; delivery wants a rectangular
//! matrix. This module re-bases everything on the bounding-box origin, tags
//! each matrix cell, resolves emoji decorations, and produces the
//! JSON-serializable [`Puzzle`] record.
//!
//! Cell tagging: a revealed cell serializes as its letter, a hidden cell as
//! `""` (letter withheld, presence known), a hole as `null` (no letter, not
//! part of any word).

use serde::ser::Serializer;
use serde::Serialize;

use crate::generator::Layout;
use crate::placement::Direction;

/// Instruction line shown above every puzzle.
pub const INSTRUCTIONS: &str = "ESCRIBE EL NOMBRE DE CADA IMAGEN";

/// One cell of the output matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Revealed clue square: the letter is shown to the solver.
    Letter(char),
    /// Occupied but not revealed; serializes as an empty string.
    Hidden,
    /// Inside the bounding box but outside every word; serializes as null.
    Hole,
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Letter(ch) => serializer.collect_str(ch),
            Cell::Hidden => serializer.serialize_str(""),
            Cell::Hole => serializer.serialize_none(),
        }
    }
}

/// Dimensions of the output matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

/// One placed word with its clue decoration, re-based on the matrix origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    pub word: String,
    /// Resolved decoration; `None` (→ null) when the word has no mapping.
    pub emoji: Option<String>,
    pub start_row: i32,
    pub start_col: i32,
    pub direction: Direction,
    pub clue_number: usize,
}

/// The full delivery record for one crossword.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub instructions: String,
    pub grid_size: GridSize,
    pub words: Vec<PlacedWord>,
    pub grid: Vec<Vec<Cell>>,
}

/// Render `layout` as the `index`-th puzzle (1-based), resolving emoji
/// decorations through `emoji_lookup` (keys are in lookup-key form).
pub fn build_puzzle(
    index: usize,
    layout: &Layout,
    emoji_lookup: impl Fn(&str) -> Option<String>,
) -> Puzzle {
    // generate() refuses empty input, so a layout always has extents; an
    // empty grid would degrade to a 1x1 hole rather than panic.
    let extents = layout.grid.extents().unwrap_or_default();

    let words = layout
        .placements
        .iter()
        .map(|p| PlacedWord {
            word: p.word.clone(),
            emoji: emoji_lookup(&crate::normalize::lookup_key(&p.word)),
            start_row: p.row - extents.min_row,
            start_col: p.col - extents.min_col,
            direction: p.direction,
            clue_number: p.clue_number,
        })
        .collect();

    let grid = (0..extents.rows())
        .map(|r| {
            (0..extents.cols())
                .map(|c| {
                    let coord = (r as i32 + extents.min_row, c as i32 + extents.min_col);
                    match layout.grid.letter_at(coord) {
                        Some(ch) if layout.reveals.contains(&coord) => Cell::Letter(ch),
                        Some(_) => Cell::Hidden,
                        None => Cell::Hole,
                    }
                })
                .collect()
        })
        .collect();

    Puzzle {
        id: format!("pc-{index}"),
        kind: "pictogram-crossword".to_string(),
        title: format!("CRUCIGRAMA {index}"),
        instructions: INSTRUCTIONS.to_string(),
        grid_size: GridSize {
            rows: extents.rows(),
            cols: extents.cols(),
        },
        words,
        grid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;
    use crate::word_list;
    use serde_json::{json, Value};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn lookup(key: &str) -> Option<String> {
        word_list::emoji_for(key).map(str::to_string)
    }

    #[test]
    fn test_single_word_puzzle() {
        let layout = Generator::new(42).generate(&words(&["gato"])).unwrap();
        let puzzle = build_puzzle(1, &layout, lookup);

        assert_eq!(puzzle.id, "pc-1");
        assert_eq!(puzzle.kind, "pictogram-crossword");
        assert_eq!(puzzle.title, "CRUCIGRAMA 1");
        assert_eq!(puzzle.grid_size, GridSize { rows: 1, cols: 4 });

        let word = &puzzle.words[0];
        assert_eq!(word.word, "GATO");
        assert_eq!(word.emoji.as_deref(), Some("🐱"));
        assert_eq!((word.start_row, word.start_col), (0, 0));
        assert_eq!(word.clue_number, 1);

        // Four letters, all revealed (min(4, 4) sample covers everything)
        assert_eq!(puzzle.grid.len(), 1);
        assert_eq!(
            puzzle.grid[0],
            vec![
                Cell::Letter('G'),
                Cell::Letter('A'),
                Cell::Letter('T'),
                Cell::Letter('O')
            ]
        );
    }

    #[test]
    fn test_coordinates_rebased_to_origin() {
        // CAR crosses CAT vertically through the C at (0, 0); nothing goes
        // negative, so start positions equal the raw anchors here. With a
        // set that grows upward, the min row shifts instead.
        let layout = Generator::new(42).generate(&words(&["cat", "car"])).unwrap();
        let puzzle = build_puzzle(1, &layout, lookup);

        for word in &puzzle.words {
            assert!(word.start_row >= 0);
            assert!(word.start_col >= 0);
        }
        assert_eq!(puzzle.grid_size, GridSize { rows: 3, cols: 3 });
    }

    #[test]
    fn test_missing_emoji_degrades_to_null() {
        let layout = Generator::new(42).generate(&words(&["zeppelin"])).unwrap();
        let puzzle = build_puzzle(1, &layout, lookup);

        assert_eq!(puzzle.words[0].emoji, None);

        let value = serde_json::to_value(&puzzle).unwrap();
        assert_eq!(value["words"][0]["emoji"], Value::Null);
    }

    #[test]
    fn test_cell_serialization() {
        assert_eq!(serde_json::to_value(Cell::Letter('Ñ')).unwrap(), json!("Ñ"));
        assert_eq!(serde_json::to_value(Cell::Hidden).unwrap(), json!(""));
        assert_eq!(serde_json::to_value(Cell::Hole).unwrap(), Value::Null);
    }

    #[test]
    fn test_json_shape_matches_delivery_format() {
        let layout = Generator::new(42)
            .generate(&words(&["mmmm", "zzz"]))
            .unwrap();
        let puzzle = build_puzzle(3, &layout, lookup);
        let value = serde_json::to_value(&puzzle).unwrap();

        assert_eq!(value["id"], json!("pc-3"));
        assert_eq!(value["type"], json!("pictogram-crossword"));
        assert_eq!(value["title"], json!("CRUCIGRAMA 3"));
        assert_eq!(value["instructions"], json!(INSTRUCTIONS));
        // MMMM on row 0, ZZZ on row 2, nothing on row 1
        assert_eq!(value["gridSize"], json!({ "rows": 3, "cols": 4 }));
        assert_eq!(value["words"][0]["startRow"], json!(0));
        assert_eq!(value["words"][1]["startRow"], json!(2));
        assert_eq!(value["words"][1]["direction"], json!("horizontal"));
        assert_eq!(value["words"][1]["clueNumber"], json!(2));

        // Row 1 is all holes; ZZZ's fourth column is a hole too
        let grid = value["grid"].as_array().unwrap();
        assert_eq!(grid[1], json!([null, null, null, null]));
        assert_eq!(grid[2][3], Value::Null);
    }

    #[test]
    fn test_hidden_cells_outnumber_reveals() {
        let input = words(&[
            "mochila", "calendario", "pizarra", "estuche", "cuadernos", "calculadora", "libros",
            "lápiz",
        ]);
        let layout = Generator::new(42).generate(&input).unwrap();
        let puzzle = build_puzzle(8, &layout, lookup);

        let mut letters = 0;
        let mut hidden = 0;
        for row in &puzzle.grid {
            for cell in row {
                match cell {
                    Cell::Letter(_) => letters += 1,
                    Cell::Hidden => hidden += 1,
                    Cell::Hole => {}
                }
            }
        }
        assert_eq!(letters, 4);
        assert_eq!(hidden, layout.grid.len() - 4);
    }
}
