//! `word_list` — The embedded word sets and emoji map
//!
//! Eight themed sets of Spanish words, each becoming one puzzle, plus the
//! word→emoji mapping used to decorate clues. Emoji keys are written with
//! their natural accents here and normalized to lookup-key form once, at
//! first use. A word without a mapping is not an error; its clue simply
//! carries no emoji.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::normalize;

/// The themed word sets, one puzzle each.
pub const WORD_SETS: &[&[&str]] = &[
    &["gato", "cáctus", "globo", "pastel", "piña", "diamante", "rayo", "corazón"],
    &["unicornio", "foca", "elefante", "estrellas", "gato", "helado", "nube", "oso"],
    &["mensaje", "labios", "fresa", "helado", "llave", "pizza", "zapato", "corona"],
    &["galleta", "pastel", "leche", "zanahoria", "salchicha", "magdalena", "pizza", "manzana"],
    &["pirata", "botella", "tesoro", "cangrejo", "mapa", "medusa", "peces", "sirena"],
    &["bruja", "princesa", "castillo", "dragón", "espada", "príncipe", "manzana", "rana"],
    &["foca", "domador", "globos", "elefante", "payaso", "mono", "cañón", "carpa"],
    &["mochila", "calendario", "pizarra", "estuche", "cuadernos", "calculadora", "libros", "lápiz"],
];

/// Raw emoji pairs; keys may carry accents and are normalized below.
const EMOJI_PAIRS: &[(&str, &str)] = &[
    ("gato", "🐱"),
    ("cactus", "🌵"),
    ("globo", "🎈"),
    ("pastel", "🍰"),
    ("piña", "🍍"),
    ("diamante", "💎"),
    ("rayo", "⚡"),
    ("corazón", "❤️"),
    ("unicornio", "🦄"),
    ("foca", "🦭"),
    ("elefante", "🐘"),
    ("estrellas", "⭐"),
    ("helado", "🍦"),
    ("nube", "☁️"),
    ("oso", "🐻"),
    ("mensaje", "💬"),
    ("labios", "👄"),
    ("fresa", "🍓"),
    ("llave", "🔑"),
    ("pizza", "🍕"),
    ("zapato", "👟"),
    ("corona", "👑"),
    ("galleta", "🍪"),
    ("leche", "🥛"),
    ("zanahoria", "🥕"),
    ("salchicha", "🌭"),
    ("magdalena", "🧁"),
    ("manzana", "🍎"),
    ("pirata", "🏴\u{200d}☠️"),
    ("botella", "🍾"),
    ("tesoro", "💰"),
    ("cangrejo", "🦀"),
    ("mapa", "🗺️"),
    ("medusa", "🪼"),
    ("peces", "🐟"),
    ("sirena", "🧜\u{200d}♀️"),
    ("bruja", "🧙\u{200d}♀️"),
    ("princesa", "👸"),
    ("castillo", "🏰"),
    ("dragón", "🐉"),
    ("espada", "🗡️"),
    ("príncipe", "🤴"),
    ("rana", "🐸"),
    ("domador", "🎩"),
    ("globos", "🎈"),
    ("payaso", "🤡"),
    ("mono", "🐵"),
    ("cañón", "💣"),
    ("carpa", "🎪"),
    ("mochila", "🎒"),
    ("calendario", "📆"),
    ("pizarra", "📋"),
    ("estuche", "🧰"),
    ("cuadernos", "📒"),
    ("calculadora", "🔢"),
    ("libros", "📚"),
    ("lápiz", "✏️"),
];

static EMOJI_MAP: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    EMOJI_PAIRS
        .iter()
        .map(|&(key, emoji)| (normalize::lookup_key(key), emoji))
        .collect()
});

/// Look up the emoji for a word already in lookup-key form.
#[must_use]
pub fn emoji_for(key: &str) -> Option<&'static str> {
    EMOJI_MAP.get(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_key_lookup() {
        assert_eq!(emoji_for("gato"), Some("🐱"));
        assert_eq!(emoji_for("pizza"), Some("🍕"));
    }

    #[test]
    fn test_accented_keys_normalized() {
        // "corazón" was declared with an accent; lookup is accent-free
        assert_eq!(emoji_for("corazon"), Some("❤️"));
        assert_eq!(emoji_for("lapiz"), Some("✏️"));
        // the ñ survives normalization, so the key keeps it
        assert_eq!(emoji_for("piña"), Some("🍍"));
        assert_eq!(emoji_for("cañon"), Some("💣"));
    }

    #[test]
    fn test_missing_key_is_none() {
        assert_eq!(emoji_for("zeppelin"), None);
        assert_eq!(emoji_for(""), None);
    }

    #[test]
    fn test_word_sets_shape() {
        assert_eq!(WORD_SETS.len(), 8);
        for set in WORD_SETS {
            assert_eq!(set.len(), 8);
        }
    }

    #[test]
    fn test_every_word_has_an_emoji() {
        for set in WORD_SETS {
            for word in *set {
                let key = normalize::lookup_key(word);
                assert!(
                    emoji_for(&key).is_some(),
                    "word \"{word}\" (key \"{key}\") has no emoji mapping"
                );
            }
        }
    }
}
