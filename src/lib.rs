//! # Rainfall Excess Core Library
//!
//! This library computes design-storm rainfall excess for a single lumped catchment
//! using the Time–Area Method loss model: an IDF curve gives the storm intensity,
//! a temporal pattern spreads the storm depth over fixed 5-minute bins, and each
//! bin loses depth to pervious and impervious surfaces before the remainder runs off.
//!
//! ## Design Philosophy
//!
//! ### Pure Computation
//! - **Immutable input**: the caller builds a [`StormInput`] and hands it to
//!   [`engine::calculate`]; nothing is retained between calls
//! - **One carried state**: the only sequential dependency is the initial-loss
//!   reservoir of each surface, carried across bins in a [`losses::LossState`]
//! - **Always a result**: bad input never raises. Unparseable numbers become
//!   `NaN` and stay `NaN` through every derived value, so a missing input is
//!   visibly different from a zero input
//!
//! ### Temporal Resolution
//! - **Bin width**: [`BIN_MINUTES`] (5 minutes)
//! - **Default window**: six bins (30 minutes) following [`DEFAULT_PATTERN`]
//! - **Bin count**: always the length of the supplied pattern
//!
//! ### Data Flow
//! 1. **Validate**: pattern sum and area sum are checked, deviations become [`validate::Warning`]s
//! 2. **Intensity**: `K · ARI^x / (A + t)^n` with `t` in hours
//! 3. **Depth**: intensity times duration, distributed by the raw pattern fractions
//! 4. **Losses**: per-surface initial and continuous losses, area weighted and capped at depth
//! 5. **Totals**: pattern, depth, loss and excess sums
//!
//! ## Core Types
//! - [`StormInput`]: everything one calculation needs, as plain numbers
//! - [`BinResult`]: depth, loss and excess for one time bin
//! - [`CalculationResult`]: the full answer, including warnings

use serde::Serialize;

pub mod cli;
pub mod config;
pub mod engine;
pub mod idf;
pub mod input;
pub mod losses;
pub mod report;
pub mod validate;


use losses::{Catchment, SurfaceLoss};
use validate::Warning;

/// Width of every time bin in minutes.
pub const BIN_MINUTES: u32 = 5;

/// Default temporal pattern: six 5-minute bins summing to 1.000.
pub const DEFAULT_PATTERN: [f64; 6] = [0.097, 0.161, 0.400, 0.164, 0.106, 0.072];

/// Parameters of one design-storm calculation.
///
/// All fields are plain numbers; any of them may be `NaN` when the caller could
/// not parse the corresponding text field. Percentages are 0–100 and should sum
/// to 100, the pattern should sum to 1.0. Neither is enforced here, see
/// [`validate::validate`].
///
/// # Example
/// ```
/// use rainfall_excess_lib::{engine, StormInput};
///
/// let input = StormInput {
///     ari: 1.0,
///     duration_minutes: 60.0,
///     k: 1.0,
///     x: 1.0,
///     a: 0.0,
///     n: 1.0,
///     pervious_percent: 50.0,
///     impervious_percent: 50.0,
///     pervious_initial_loss: 0.0,
///     impervious_initial_loss: 0.0,
///     pervious_continuous_loss: 0.0,
///     impervious_continuous_loss: 0.0,
///     pattern: vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
/// };
///
/// let result = engine::calculate(&input);
/// assert_eq!(result.intensity, 1.0);
/// assert_eq!(result.bins[0].excess, 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StormInput {
    /// Average recurrence interval in years
    pub ari: f64,
    /// Total storm duration in minutes
    pub duration_minutes: f64,
    /// IDF coefficient K
    pub k: f64,
    /// IDF exponent on ARI
    pub x: f64,
    /// IDF duration offset in hours
    pub a: f64,
    /// IDF exponent on duration
    pub n: f64,
    pub pervious_percent: f64,
    pub impervious_percent: f64,
    /// mm
    pub pervious_initial_loss: f64,
    /// mm
    pub impervious_initial_loss: f64,
    /// mm/hr
    pub pervious_continuous_loss: f64,
    /// mm/hr
    pub impervious_continuous_loss: f64,
    /// Fraction of the storm depth falling in each bin
    pub pattern: Vec<f64>,
}

impl StormInput {
    /// Area split and loss parameters of the catchment.
    pub fn catchment(&self) -> Catchment {
        Catchment {
            pervious_percent: self.pervious_percent,
            impervious_percent: self.impervious_percent,
            pervious: SurfaceLoss {
                initial_loss: self.pervious_initial_loss,
                continuous_loss: self.pervious_continuous_loss,
            },
            impervious: SurfaceLoss {
                initial_loss: self.impervious_initial_loss,
                continuous_loss: self.impervious_continuous_loss,
            },
        }
    }
}

/// Depth accounting for one time bin.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BinResult {
    /// Bin span in minutes, e.g. `"5-10"`
    pub label: String,
    /// Pattern fraction as supplied
    pub fraction: f64,
    /// Rainfall depth in mm
    pub depth: f64,
    /// Area-weighted loss in mm, never above `depth`
    pub loss: f64,
    /// Rainfall excess in mm, never negative
    pub excess: f64,
    /// Excess expressed as mm/s over the bin
    pub excess_rate: f64,
}

/// Column totals over all bins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    pub pattern: f64,
    pub depth: f64,
    pub loss: f64,
    pub excess: f64,
}

impl Summary {
    /// Sum every column. `NaN` in any bin makes the matching total `NaN`.
    pub fn from_bins(bins: &[BinResult]) -> Self {
        bins.iter().fold(Summary::default(), |acc, bin| Summary {
            pattern: acc.pattern + bin.fraction,
            depth: acc.depth + bin.depth,
            loss: acc.loss + bin.loss,
            excess: acc.excess + bin.excess,
        })
    }
}

/// Complete output of [`engine::calculate`].
///
/// Serializes to JSON with `NaN` fields written as `null` and warnings written
/// as their display messages.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Design intensity in mm/hr
    pub intensity: f64,
    /// Storm depth in mm
    pub total_depth: f64,
    /// One entry per pattern fraction, in order
    pub bins: Vec<BinResult>,
    pub summary: Summary,
    pub warnings: Vec<Warning>,
}

/// Label of the bin at `index`, in minutes from storm start.
pub fn bin_label(index: usize) -> String {
    let start = index as u32 * BIN_MINUTES;
    format!("{}-{}", start, start + BIN_MINUTES)
}
