//! `normalize` — Diacritic stripping and case folding for crossword words
//!
//! The dataset contains accented Spanish words ("cáctus", "corazón"). Grid
//! letters and emoji-lookup keys both want the accent-free form, so a single
//! stripping rule feeds two derived forms:
//!
//! - `display_form` — uppercase, used for the letters written into the grid.
//! - `lookup_key` — lowercase, used to match the emoji map.
//!
//! The one deliberate exception is `ñ`/`Ñ`: it is a distinct letter in
//! Spanish, not an accented `n`, so it passes through intact even though NFD
//! would decompose it into `n` + a combining tilde.
//!
//! All three functions are pure: same input, same output, no error cases.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Remove diacritics from `text`, preserving `ñ`/`Ñ`.
///
/// Each character is NFD-decomposed, combining marks are dropped, and the
/// result is re-composed to NFC.
///
/// # Examples
///
/// ```
/// use crucigrama::normalize::strip_accents;
///
/// assert_eq!(strip_accents("corazón"), "corazon");
/// assert_eq!(strip_accents("piña"), "piña");
/// ```
#[must_use]
pub fn strip_accents(text: &str) -> String {
    let stripped: String = text
        .chars()
        .flat_map(|c| {
            // ñ is its own letter; exempt it from decomposition entirely
            if c == 'ñ' || c == 'Ñ' {
                vec![c]
            } else {
                c.nfd().filter(|d| !is_combining_mark(*d)).collect()
            }
        })
        .collect();
    stripped.nfc().collect()
}

/// Accent-free uppercase form, as written into the grid.
#[must_use]
pub fn display_form(word: &str) -> String {
    strip_accents(word).to_uppercase()
}

/// Accent-free lowercase form, as used for emoji-map lookups.
#[must_use]
pub fn lookup_key(word: &str) -> String {
    strip_accents(word).to_lowercase()
}
