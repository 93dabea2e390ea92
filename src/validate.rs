//! Soft input checks.
//!
//! A pattern that does not sum to 1.0, or areas that do not sum to 100 %, are
//! reported but never corrected: the calculation still runs on the raw values.

use serde::{Serialize, Serializer};
use std::fmt;

/// Allowed deviation of the pattern sum from 1.0.
pub const PATTERN_SUM_TOLERANCE: f64 = 0.02;

/// Allowed deviation of pervious + impervious from 100, in percentage points.
pub const AREA_SUM_TOLERANCE: f64 = 0.5;

/// A non-fatal problem with the storm input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Warning {
    /// Temporal pattern fractions do not add up to ~1.0
    PatternSum { sum: f64 },
    /// Pervious and impervious percentages do not add up to ~100
    AreaSum { sum: f64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::PatternSum { sum } => {
                write!(f, "Temporal pattern sums to {sum:.3} (not ~1.000).")
            }
            Warning::AreaSum { sum } => write!(f, "Areas sum to {sum:.1}% (not 100%)."),
        }
    }
}

impl Serialize for Warning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Check the pattern and area split, pattern first.
///
/// A `NaN` sum is reported too, since it is not close to its target.
pub fn validate(pattern: &[f64], pervious_percent: f64, impervious_percent: f64) -> Vec<Warning> {
    let mut warnings = Vec::new();

    let pattern_sum = pattern.iter().fold(0.0_f64, |acc, fraction| acc + *fraction);
    if outside(pattern_sum, 1.0, PATTERN_SUM_TOLERANCE) {
        warnings.push(Warning::PatternSum { sum: pattern_sum });
    }

    let area_sum = pervious_percent + impervious_percent;
    if outside(area_sum, 100.0, AREA_SUM_TOLERANCE) {
        warnings.push(Warning::AreaSum { sum: area_sum });
    }

    warnings
}

fn outside(value: f64, target: f64, tolerance: f64) -> bool {
    !((value - target).abs() <= tolerance)
}
