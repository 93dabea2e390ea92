//! # Design Rainfall from IDF Curves
//!
//! Intensity–duration–frequency relationship used to size the design storm:
//!
//! ```text
//! i = K · ARI^x / (A + t)^n        t = duration in hours
//! ```
//!
//! Inputs are not range checked. A non-positive `(A + t)` raised to a
//! fractional power, or a zero denominator, yields a value that is reported as
//! `NaN` so the caller shows "not available" instead of a number.

/// Design rainfall intensity in mm/hr.
///
/// Returns `NaN` whenever the formula does not produce a finite value.
pub fn compute_intensity(ari: f64, duration_minutes: f64, k: f64, x: f64, a: f64, n: f64) -> f64 {
    // powf(1, NaN) and powf(NaN, 0) are both 1
    if [ari, duration_minutes, k, x, a, n].iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }

    let t_hours = duration_minutes / 60.0;
    let intensity = k * ari.powf(x) / (a + t_hours).powf(n);

    if intensity.is_finite() {
        intensity
    } else {
        f64::NAN
    }
}

/// Total storm depth in mm over the full duration.
pub fn compute_total_depth(intensity: f64, duration_minutes: f64) -> f64 {
    intensity * duration_minutes / 60.0
}
