//! Field validity and presentation rules.
//!
//! The upstream API pads records with placeholder values ("Desconocido",
//! zero amounts, the literal string "nan" from numeric coercion). These
//! rules decide what is worth showing and how to format it. They apply
//! before display only, never before filtering or aggregation. Malformed
//! values degrade to an empty string rather than an error.

/// Placeholder the upstream uses for unknown data.
const UNKNOWN_SENTINEL: &str = "Desconocido";

/// Whether a string value carries displayable data.
///
/// False for the empty string, the unknown-data placeholder, zero in its
/// string forms, and `"nan"` (upstream numeric-to-string coercion).
///
/// # Examples
///
/// ```
/// use invierte_core::display::is_displayable;
///
/// assert!(is_displayable("VIABLE"));
/// assert!(!is_displayable("Desconocido"));
/// assert!(!is_displayable("0.00"));
/// ```
pub fn is_displayable(value: &str) -> bool {
    !matches!(value, "" | "0" | "0.00" | "nan" | UNKNOWN_SENTINEL)
}

/// Whether a numeric amount carries displayable data.
///
/// Zero and NaN are treated the same way their string forms are.
pub fn is_displayable_amount(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Capitalize the first character and lowercase the rest.
///
/// Empty input yields an empty string.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Reformat a `YYYYMM` period code as `YYYY-MM`.
///
/// Anything that is not exactly six ASCII digits yields an empty string,
/// which suppresses the field instead of erroring on bad upstream data.
///
/// # Examples
///
/// ```
/// use invierte_core::display::format_period;
///
/// assert_eq!(format_period("202405"), "2024-05");
/// assert_eq!(format_period("2024"), "");
/// assert_eq!(format_period("2024AB"), "");
/// ```
pub fn format_period(code: &str) -> String {
    if code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}-{}", &code[..4], &code[4..])
    } else {
        String::new()
    }
}

/// Format an amount as Peruvian soles with two fractional digits.
///
/// Follows the es-PE convention: `S/` symbol, comma thousands grouping,
/// dot decimal separator. Non-finite input yields an empty string.
///
/// # Examples
///
/// ```
/// use invierte_core::display::format_soles;
///
/// assert_eq!(format_soles(1500.5), "S/ 1,500.50");
/// assert_eq!(format_soles(1234567.891), "S/ 1,234,567.89");
/// ```
pub fn format_soles(amount: f64) -> String {
    if !amount.is_finite() {
        return String::new();
    }

    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let units = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.bytes().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit as char);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}S/ {grouped}.{frac:02}")
}

/// Clean up the alternative-description field.
///
/// The upstream value arrives with a stray leading colon; strip it and
/// surrounding whitespace.
pub fn clean_detail_text(text: &str) -> String {
    text.trim()
        .strip_prefix(':')
        .map(str::trim_start)
        .unwrap_or(text.trim())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Validity tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_sentinels_are_not_displayable() {
        for sentinel in ["", "0", "0.00", "Desconocido", "nan"] {
            assert!(!is_displayable(sentinel), "{sentinel:?} should be suppressed");
        }
    }

    #[test]
    fn test_regular_values_are_displayable() {
        assert!(is_displayable("VIABLE"));
        assert!(is_displayable("0.5"));
        assert!(is_displayable("desconocido")); // sentinel match is exact
    }

    #[test]
    fn test_amount_validity() {
        assert!(!is_displayable_amount(0.0));
        assert!(!is_displayable_amount(f64::NAN));
        assert!(is_displayable_amount(1500.5));
        assert!(is_displayable_amount(-3.0));
    }

    // ------------------------------------------------------------------------
    // capitalize_first tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("VIABLE"), "Viable");
        assert_eq!(capitalize_first("municipalidad distrital"), "Municipalidad distrital");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_capitalize_first_accented() {
        assert_eq!(capitalize_first("ÑAÑA"), "Ñaña");
    }

    // ------------------------------------------------------------------------
    // format_period tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_format_period_valid_code() {
        assert_eq!(format_period("202405"), "2024-05");
        assert_eq!(format_period("202301"), "2023-01");
    }

    #[test]
    fn test_format_period_rejects_bad_input() {
        assert_eq!(format_period("2024"), "");
        assert_eq!(format_period(""), "");
        assert_eq!(format_period("2024055"), "");
        assert_eq!(format_period("2024AB"), "");
    }

    // ------------------------------------------------------------------------
    // format_soles tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_format_soles_two_decimals() {
        assert_eq!(format_soles(1500.5), "S/ 1,500.50");
        assert_eq!(format_soles(0.0), "S/ 0.00");
        assert_eq!(format_soles(12.0), "S/ 12.00");
    }

    #[test]
    fn test_format_soles_thousands_grouping() {
        assert_eq!(format_soles(1234567.891), "S/ 1,234,567.89");
        assert_eq!(format_soles(999.99), "S/ 999.99");
        assert_eq!(format_soles(1000.0), "S/ 1,000.00");
    }

    #[test]
    fn test_format_soles_negative_and_non_finite() {
        assert_eq!(format_soles(-1500.5), "-S/ 1,500.50");
        assert_eq!(format_soles(f64::NAN), "");
        assert_eq!(format_soles(f64::INFINITY), "");
    }

    // ------------------------------------------------------------------------
    // clean_detail_text tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_clean_detail_text() {
        assert_eq!(clean_detail_text(": ampliación del sistema"), "ampliación del sistema");
        assert_eq!(clean_detail_text("  sin prefijo  "), "sin prefijo");
        assert_eq!(clean_detail_text(":solo colon"), "solo colon");
        assert_eq!(clean_detail_text(""), "");
    }
}
