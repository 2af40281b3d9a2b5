//! Threshold decisions. Pure: a reading and the thresholds go in, an
//! optional warning comes out. Recording the warning is the caller's job.

pub mod cpu;
pub mod disk;
pub mod memory;
pub mod processes;

/// `true` when `value` is strictly above `threshold`. NaN never exceeds.
#[must_use]
pub fn exceeds(value: f64, threshold: f64) -> bool {
    value > threshold
}

/// Renders a percentage for a warning message.
///
/// Whole numbers keep one decimal (`85.0`), anything else prints in its
/// shortest exact form (`85.3`).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_percent(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
