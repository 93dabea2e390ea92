//! # Rainfall-Excess Engine
//!
//! Single entry point tying the IDF curve, depth distribution, loss model and
//! validation together. Deterministic: identical input gives bit-identical
//! output, and each call owns its own loss reservoirs.

use crate::idf::{compute_intensity, compute_total_depth};
use crate::losses::{accumulate_loss, distribute_depth};
use crate::validate::validate;
use crate::{CalculationResult, StormInput, Summary};
use tracing::{debug, warn};

/// Compute intensity, depth and per-bin losses for one design storm.
///
/// Never fails. Input problems show up as [`crate::validate::Warning`]s or as
/// `NaN` fields in the result.
pub fn calculate(input: &StormInput) -> CalculationResult {
    let warnings = validate(
        &input.pattern,
        input.pervious_percent,
        input.impervious_percent,
    );
    for warning in &warnings {
        warn!(%warning, "storm input check");
    }

    let intensity = compute_intensity(
        input.ari,
        input.duration_minutes,
        input.k,
        input.x,
        input.a,
        input.n,
    );
    let total_depth = compute_total_depth(intensity, input.duration_minutes);
    debug!(intensity, total_depth, bins = input.pattern.len(), "design storm");

    let bin_depths = distribute_depth(total_depth, &input.pattern);
    let bins = accumulate_loss(&bin_depths, &input.pattern, &input.catchment());
    let summary = Summary::from_bins(&bins);

    debug!(
        loss = summary.loss,
        excess = summary.excess,
        "storm totals"
    );

    CalculationResult {
        intensity,
        total_depth,
        bins,
        summary,
        warnings,
    }
}
