pub mod disk_collector;
pub mod sysinfo_collector;

/// Rounds a percentage to one decimal place, the precision warnings report.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
