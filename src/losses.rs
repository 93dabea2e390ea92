//! # Time–Area Method Losses
//!
//! Bin-by-bin loss accounting for a catchment split into pervious and
//! impervious surfaces. Each surface has:
//!
//! - an **initial loss** (mm): a reservoir filled by the first rain of the
//!   storm, never replenished by non-negative bin depths
//! - a **continuous loss** (mm/hr): a steady rate applied to whatever depth is
//!   left in a bin once the reservoir is exhausted
//!
//! Surface losses are weighted by area and then capped at the bin depth. The
//! cap is applied to the weighted loss, not to each surface, so headroom on one
//! surface can absorb an oversized loss on the other.
//!
//! Every `min`/`max` here propagates `NaN`: a missing input must not be
//! silently replaced by the other operand.

use crate::{bin_label, BinResult, BIN_MINUTES};
use tracing::debug;

/// Loss parameters of one surface type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceLoss {
    /// Depletable initial loss [mm]
    pub initial_loss: f64,
    /// Steady loss rate [mm/hr]
    pub continuous_loss: f64,
}

/// Area split and losses of a lumped catchment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Catchment {
    pub pervious_percent: f64,
    pub impervious_percent: f64,
    pub pervious: SurfaceLoss,
    pub impervious: SurfaceLoss,
}

impl Catchment {
    /// Area-weighted loss of one bin [mm].
    pub fn weighted_loss(&self, pervious_loss: f64, impervious_loss: f64) -> f64 {
        (self.pervious_percent * pervious_loss + self.impervious_percent * impervious_loss) / 100.0
    }
}

/// Remaining initial loss of each surface during one calculation.
///
/// Starts at the configured initial losses and never goes below zero. It only
/// decreases while bin depths are non-negative: a negative depth (from a
/// negative pattern fraction) is taken as negative initial loss and refills
/// the reservoir.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LossState {
    pub pervious_remaining: f64,
    pub impervious_remaining: f64,
}

impl LossState {
    /// Full reservoirs at the start of a storm.
    pub fn new(catchment: &Catchment) -> Self {
        Self {
            pervious_remaining: catchment.pervious.initial_loss,
            impervious_remaining: catchment.impervious.initial_loss,
        }
    }

    /// Apply one bin of rainfall to both surfaces.
    ///
    /// Updates the reservoirs and returns `(pervious_loss, impervious_loss)` in mm.
    pub fn absorb(&mut self, depth: f64, catchment: &Catchment, dt_hours: f64) -> (f64, f64) {
        let (pervious_loss, pervious_remaining) =
            surface_bin_loss(depth, self.pervious_remaining, &catchment.pervious, dt_hours);
        let (impervious_loss, impervious_remaining) = surface_bin_loss(
            depth,
            self.impervious_remaining,
            &catchment.impervious,
            dt_hours,
        );

        self.pervious_remaining = pervious_remaining;
        self.impervious_remaining = impervious_remaining;

        (pervious_loss, impervious_loss)
    }
}

/// Loss of a single surface over one bin.
///
/// Depth first fills whatever initial loss is outstanding, the rest is subject
/// to at most `continuous_loss · dt_hours` of continuous loss.
///
/// Returns (loss, remaining):
/// - loss: initial plus continuous loss [mm]
/// - remaining: initial loss still outstanding after this bin [mm]
pub fn surface_bin_loss(
    depth: f64,
    remaining: f64,
    surface: &SurfaceLoss,
    dt_hours: f64,
) -> (f64, f64) {
    let initial = min_nan(remaining, depth);
    let capacity = surface.continuous_loss * dt_hours;
    let continuous = max_nan(0.0, min_nan(depth - initial, capacity));
    let remaining = max_nan(0.0, remaining - initial);

    (initial + continuous, remaining)
}

/// Rainfall depth of each bin: the raw pattern fraction times the storm depth.
///
/// The pattern is not renormalised.
pub fn distribute_depth(total_depth: f64, pattern: &[f64]) -> Vec<f64> {
    pattern.iter().map(|fraction| fraction * total_depth).collect()
}

/// Run the loss model over every bin in order.
///
/// `bin_depths` and `pattern` are paired by index; the reservoirs in a fresh
/// [`LossState`] are carried from each bin to the next.
pub fn accumulate_loss(bin_depths: &[f64], pattern: &[f64], catchment: &Catchment) -> Vec<BinResult> {
    let bin_minutes = f64::from(BIN_MINUTES);
    let dt_hours = bin_minutes / 60.0;
    let bin_seconds = bin_minutes * 60.0;

    bin_depths
        .iter()
        .zip(pattern)
        .enumerate()
        .scan(LossState::new(catchment), |state, (index, (&depth, &fraction))| {
            let (pervious_loss, impervious_loss) = state.absorb(depth, catchment, dt_hours);

            let loss = min_nan(catchment.weighted_loss(pervious_loss, impervious_loss), depth);
            let excess = max_nan(0.0, depth - loss);

            debug!(
                bin = index,
                depth,
                pervious_loss,
                impervious_loss,
                loss,
                excess,
                pervious_remaining = state.pervious_remaining,
                impervious_remaining = state.impervious_remaining,
                "bin losses"
            );

            Some(BinResult {
                label: bin_label(index),
                fraction,
                depth,
                loss,
                excess,
                excess_rate: excess / bin_seconds,
            })
        })
        .collect()
}

fn min_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn max_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
