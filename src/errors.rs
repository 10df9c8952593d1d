//! Error types for crossword generation with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (G001-G002) for documentation lookup:
//!
//! - G001: `EmptyInput` (No words supplied)
//! - G002: `ConflictingPlacement` (Letter conflict while committing a word)
//!
//! # Examples
//!
//! ```
//! use crucigrama::errors::GenerateError;
//!
//! fn place_something(words: &[String]) -> Result<(), GenerateError> {
//!     if words.is_empty() {
//!         return Err(GenerateError::EmptyInput);
//!     }
//!     Ok(())
//! }
//!
//! match place_something(&[]) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;

/// Custom error type for the generation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// No words were supplied, so there is no first word to seed the grid with.
    #[error("no words supplied")]
    EmptyInput,

    /// A commit tried to write a different letter into an occupied cell.
    ///
    /// The candidate validity check is supposed to rule this out before any
    /// commit, so hitting it means the placement search broke an invariant.
    /// It is fatal and never resolved by overwriting.
    #[error("conflicting letters at ({row}, {col}) while placing \"{word}\": existing '{existing}', attempted '{attempted}'")]
    ConflictingPlacement {
        word: String,
        row: i32,
        col: i32,
        existing: char,
        attempted: char,
    },
}

impl From<GenerateError> for io::Error {
    fn from(ge: GenerateError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, ge.to_string())
    }
}

impl GenerateError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::EmptyInput => "G001",
            GenerateError::ConflictingPlacement { .. } => "G002",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GenerateError::EmptyInput => {
                Some("Supply at least one word per crossword (e.g., [\"gato\", \"rayo\"])")
            }
            GenerateError::ConflictingPlacement { .. } => {
                Some("This is an internal error: a placement passed validation but conflicted on commit.")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
