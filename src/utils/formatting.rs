//! Formatting helpers for durations and hour totals.

use chrono::TimeDelta;

/// Render a pair duration as a short human-readable string, es: "07h 30m".
/// Sub-minute remainders are truncated.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let mins = elapsed.num_minutes().max(0);
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

/// Hours rendered with two decimals, the display form of every hour total.
pub fn hours2fixed(hours: f64) -> String {
    format!("{:.2}", hours)
}
