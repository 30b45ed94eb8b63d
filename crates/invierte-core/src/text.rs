//! Text normalization for search matching and display correction.
//!
//! Two distinct operations live here and must not be conflated:
//!
//! - [`comparison_key`]: lossy case- and accent-folding, used only to
//!   decide whether a search term matches a field value.
//! - [`restore_place_names`]: lookup-table substitution restoring special
//!   characters in specific place names, used only for on-screen text.
//!   The upstream source drops the Ñ from a handful of all-caps place
//!   names; the table puts it back.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Known place-name tokens with their corrected display forms.
const PLACE_NAME_FIXES: &[(&str, &str)] = &[
    ("FERREAFE", "FERREÑAFE"),
    ("CAARIS", "CAÑARIS"),
];

/// Fold a string for case- and accent-insensitive comparison.
///
/// Decomposes accented characters (NFD), drops the combining marks, and
/// lowercases the rest. Empty input yields an empty string.
///
/// # Examples
///
/// ```
/// use invierte_core::text::comparison_key;
///
/// assert_eq!(comparison_key("Cañaris"), "canaris");
/// assert_eq!(comparison_key("CANARIS"), "canaris");
/// assert_eq!(comparison_key("EDUCACIÓN"), "educacion");
/// ```
pub fn comparison_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Restore special characters in known place names for display.
///
/// Replaces whole-word occurrences of tokens from the correction table;
/// any other token passes through unchanged.
///
/// # Examples
///
/// ```
/// use invierte_core::text::restore_place_names;
///
/// assert_eq!(restore_place_names("FERREAFE"), "FERREÑAFE");
/// assert_eq!(restore_place_names("LIMA"), "LIMA");
/// ```
pub fn restore_place_names(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            word.push(ch);
        } else {
            flush_word(&mut out, &mut word);
            out.push(ch);
        }
    }
    flush_word(&mut out, &mut word);
    out
}

/// Append the pending word, corrected if it is a known place name.
fn flush_word(out: &mut String, word: &mut String) {
    if word.is_empty() {
        return;
    }
    match PLACE_NAME_FIXES.iter().find(|(bare, _)| bare == word) {
        Some((_, fixed)) => out.push_str(fixed),
        None => out.push_str(word.as_str()),
    }
    word.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ------------------------------------------------------------------------
    // comparison_key tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_comparison_key_strips_accents() {
        assert_eq!(comparison_key("Cañaris"), "canaris");
        assert_eq!(comparison_key("EDUCACIÓN"), "educacion");
        assert_eq!(comparison_key("Huánuco"), "huanuco");
    }

    #[test]
    fn test_comparison_key_accent_and_case_insensitive() {
        assert_eq!(comparison_key("Cañaris"), comparison_key("CANARIS"));
        assert_eq!(comparison_key("FERREÑAFE"), comparison_key("ferrenafe"));
    }

    #[test]
    fn test_comparison_key_empty() {
        assert_eq!(comparison_key(""), "");
    }

    #[test]
    fn test_comparison_key_plain_ascii_is_lowercased() {
        assert_eq!(comparison_key("LIMA Norte 3"), "lima norte 3");
    }

    // ------------------------------------------------------------------------
    // restore_place_names tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_restore_known_token() {
        assert_eq!(restore_place_names("FERREAFE"), "FERREÑAFE");
        assert_eq!(restore_place_names("CAARIS"), "CAÑARIS");
    }

    #[test]
    fn test_restore_unknown_token_unchanged() {
        assert_eq!(restore_place_names("LIMA"), "LIMA");
        assert_eq!(restore_place_names(""), "");
    }

    #[test]
    fn test_restore_whole_word_within_sentence() {
        assert_eq!(
            restore_place_names("MUNICIPALIDAD PROVINCIAL DE FERREAFE"),
            "MUNICIPALIDAD PROVINCIAL DE FERREÑAFE"
        );
    }

    #[test]
    fn test_restore_partial_word_not_replaced() {
        // Token boundaries matter: a longer word containing the bare form
        // is left alone.
        assert_eq!(restore_place_names("FERREAFES"), "FERREAFES");
        assert_eq!(restore_place_names("XFERREAFE"), "XFERREAFE");
    }

    #[test]
    fn test_restore_preserves_separators() {
        assert_eq!(
            restore_place_names("FERREAFE - CAARIS (zona rural)"),
            "FERREÑAFE - CAÑARIS (zona rural)"
        );
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    proptest! {
        #[test]
        fn test_comparison_key_idempotent(s in "\\PC*") {
            let once = comparison_key(&s);
            prop_assert_eq!(comparison_key(&once), once);
        }

        #[test]
        fn test_comparison_key_case_invariant(s in "[a-zA-ZáéíóúñÁÉÍÓÚÑ ]*") {
            prop_assert_eq!(
                comparison_key(&s.to_uppercase()),
                comparison_key(&s.to_lowercase())
            );
        }
    }
}
