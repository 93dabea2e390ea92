//! # Result Rendering
//!
//! Turns a [`CalculationResult`] into a fixed-width text table for the
//! terminal, or JSON for other tools. Values that are not finite render as
//! `—` in text and `null` in JSON.

use crate::CalculationResult;

/// Placeholder for values that are not available.
pub const NOT_AVAILABLE: &str = "—";

/// Format a value with fixed decimals, or [`NOT_AVAILABLE`] if not finite.
pub fn fmt_value(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        NOT_AVAILABLE.to_string()
    }
}

/// Render the full report: storm header, bin table, totals and status line.
pub fn render_table(location: &str, result: &CalculationResult) -> String {
    let mut lines = vec![
        format!("Design storm: {location}"),
        format!("Intensity (mm/hr): {}", fmt_value(result.intensity, 3)),
        format!("Total depth (mm):  {}", fmt_value(result.total_depth, 3)),
        String::new(),
        format!(
            "{:<10}{:>10}{:>12}{:>12}{:>12}{:>14}",
            "Bin (min)", "Fraction", "Depth (mm)", "Loss (mm)", "Excess (mm)", "Excess (mm/s)"
        ),
    ];

    lines.extend(result.bins.iter().map(|bin| {
        format!(
            "{:<10}{:>10}{:>12}{:>12}{:>12}{:>14}",
            bin.label,
            fmt_value(bin.fraction, 3),
            fmt_value(bin.depth, 3),
            fmt_value(bin.loss, 3),
            fmt_value(bin.excess, 3),
            fmt_value(bin.excess_rate, 4),
        )
    }));

    let summary = &result.summary;
    lines.push(format!(
        "{:<10}{:>10}{:>12}{:>12}{:>12}",
        "Total",
        fmt_value(summary.pattern, 3),
        fmt_value(summary.depth, 3),
        fmt_value(summary.loss, 3),
        fmt_value(summary.excess, 3),
    ));
    lines.push(String::new());
    lines.push(status_line(result));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// `⚠ <warnings>` when the input had problems, otherwise `✓ Done.`
pub fn status_line(result: &CalculationResult) -> String {
    if result.warnings.is_empty() {
        "✓ Done.".to_string()
    } else {
        let messages: Vec<String> = result.warnings.iter().map(|w| w.to_string()).collect();
        format!("⚠ {}", messages.join(" "))
    }
}

/// Pretty-printed JSON of the whole result.
pub fn render_json(result: &CalculationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
