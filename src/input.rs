//! # Text Input Boundary
//!
//! Converts free-form text (form fields, command-line values) into the numbers
//! the engine works with. Nothing here fails: text that is not a finite number
//! becomes `NaN`, so the affected results read "not available" instead of
//! silently turning into zero.

use crate::StormInput;
use clap::Args;
use tracing::warn;

/// Parse one numeric field.
///
/// Surrounding whitespace is ignored. Empty, non-numeric and non-finite text
/// (`"inf"`, `"NaN"`) all give `NaN`.
///
/// # Example
/// ```
/// use rainfall_excess_lib::input::parse_number;
///
/// assert_eq!(parse_number(" 2.5 "), 2.5);
/// assert!(parse_number("").is_nan());
/// assert!(parse_number("ten").is_nan());
/// ```
pub fn parse_number(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!(input = text, "not a finite number, result will be unavailable");
            f64::NAN
        }
    }
}

/// Parse a list of pattern fractions.
///
/// Fractions are separated by commas, or by whitespace when there is no comma.
/// With commas, an empty entry is a missing fraction and becomes `NaN`.
pub fn parse_pattern(text: &str) -> Vec<f64> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    if text.contains(',') {
        text.split(',').map(parse_number).collect()
    } else {
        text.split_whitespace().map(parse_number).collect()
    }
}

/// Raw text overrides for the fields of a [`StormInput`].
///
/// Fields left as `None` keep the value they already have.
#[derive(Args, Clone, Debug, Default)]
pub struct StormOverrides {
    #[arg(
        long,
        allow_negative_numbers = true,
        value_name = "YEARS",
        help = "Average recurrence interval"
    )]
    pub ari: Option<String>,

    #[arg(long, allow_negative_numbers = true, value_name = "MINUTES", help = "Storm duration")]
    pub duration: Option<String>,

    #[arg(long, allow_negative_numbers = true, help = "IDF coefficient K")]
    pub idf_k: Option<String>,

    #[arg(long, allow_negative_numbers = true, help = "IDF exponent x (on ARI)")]
    pub idf_x: Option<String>,

    #[arg(long, allow_negative_numbers = true, help = "IDF offset A (hours)")]
    pub idf_a: Option<String>,

    #[arg(long, allow_negative_numbers = true, help = "IDF exponent n (on duration)")]
    pub idf_n: Option<String>,

    #[arg(long, allow_negative_numbers = true, value_name = "PERCENT")]
    pub pervious_pct: Option<String>,

    #[arg(long, allow_negative_numbers = true, value_name = "PERCENT")]
    pub impervious_pct: Option<String>,

    #[arg(long, allow_negative_numbers = true, value_name = "MM", help = "Pervious initial loss")]
    pub pervious_initial: Option<String>,

    #[arg(
        long,
        allow_negative_numbers = true,
        value_name = "MM_PER_HR",
        help = "Pervious continuous loss"
    )]
    pub pervious_continuous: Option<String>,

    #[arg(long, allow_negative_numbers = true, value_name = "MM", help = "Impervious initial loss")]
    pub impervious_initial: Option<String>,

    #[arg(
        long,
        allow_negative_numbers = true,
        value_name = "MM_PER_HR",
        help = "Impervious continuous loss"
    )]
    pub impervious_continuous: Option<String>,

    #[arg(
        long,
        value_name = "FRACTIONS",
        allow_hyphen_values = true,
        help = "Temporal pattern, e.g. \"0.097,0.161,0.400,0.164,0.106,0.072\""
    )]
    pub pattern: Option<String>,
}

impl StormOverrides {
    /// Overwrite every field of `input` that has an override.
    pub fn apply(&self, input: &mut StormInput) {
        let fields = [
            (&self.ari, &mut input.ari),
            (&self.duration, &mut input.duration_minutes),
            (&self.idf_k, &mut input.k),
            (&self.idf_x, &mut input.x),
            (&self.idf_a, &mut input.a),
            (&self.idf_n, &mut input.n),
            (&self.pervious_pct, &mut input.pervious_percent),
            (&self.impervious_pct, &mut input.impervious_percent),
            (&self.pervious_initial, &mut input.pervious_initial_loss),
            (&self.pervious_continuous, &mut input.pervious_continuous_loss),
            (&self.impervious_initial, &mut input.impervious_initial_loss),
            (&self.impervious_continuous, &mut input.impervious_continuous_loss),
        ];
        for (text, target) in fields {
            if let Some(text) = text {
                *target = parse_number(text);
            }
        }

        if let Some(text) = &self.pattern {
            input.pattern = parse_pattern(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_number("10"), 10.0);
        assert_eq!(parse_number("-0.5"), -0.5);
        assert_eq!(parse_number("\t61.976\n"), 61.976);
        assert_eq!(parse_number("1e2"), 100.0);
    }

    #[test]
    fn unparseable_text_is_nan_not_zero() {
        for text in ["", "   ", "abc", "12abc", "1,5", "inf", "-inf", "NaN"] {
            assert!(parse_number(text).is_nan(), "{text:?} should be NaN");
        }
    }

    #[test]
    fn pattern_with_commas() {
        assert_eq!(parse_pattern("0.2, 0.3,0.5"), vec![0.2, 0.3, 0.5]);
    }

    #[test]
    fn pattern_with_whitespace() {
        assert_eq!(parse_pattern("0.2 0.3\t0.5"), vec![0.2, 0.3, 0.5]);
    }

    #[test]
    fn pattern_missing_entry_is_nan() {
        let pattern = parse_pattern("0.2,,0.8");
        assert_eq!(pattern.len(), 3);
        assert!(pattern[1].is_nan());
    }

    #[test]
    fn empty_pattern_text_is_empty() {
        assert!(parse_pattern("").is_empty());
        assert!(parse_pattern("  ").is_empty());
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let mut input = Config::default().storm_input();
        let before = input.clone();

        let overrides = StormOverrides {
            ari: Some("100".to_string()),
            impervious_pct: Some("".to_string()),
            pattern: Some("0.5,0.5".to_string()),
            ..Default::default()
        };
        overrides.apply(&mut input);

        assert_eq!(input.ari, 100.0);
        assert!(input.impervious_percent.is_nan());
        assert_eq!(input.pattern, vec![0.5, 0.5]);
        assert_eq!(input.duration_minutes, before.duration_minutes);
        assert_eq!(input.k, before.k);
        assert_eq!(input.pervious_percent, before.pervious_percent);
    }

    #[test]
    fn no_overrides_is_identity() {
        let mut input = Config::default().storm_input();
        let before = input.clone();
        StormOverrides::default().apply(&mut input);
        assert_eq!(input, before);
    }
}
