use crate::domain::entities::check::CheckKind;
use crate::domain::entities::process::{ProcessReading, ProcessRecord};
use crate::domain::entities::warning::Warning;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::exceeds;

/// Sampled processes whose CPU share is strictly above the CPU threshold,
/// in enumeration order. Skipped readings never qualify.
#[must_use]
pub fn over_threshold<'a>(
    readings: &'a [ProcessReading],
    thresholds: &ThresholdSet,
) -> Vec<&'a ProcessRecord> {
    readings
        .iter()
        .filter_map(ProcessReading::record)
        .filter(|p| exceeds(p.cpu_percent, thresholds.cpu))
        .collect()
}

/// One warning listing every qualifying process, or nothing when none qualify.
#[must_use]
pub fn evaluate(readings: &[ProcessReading], thresholds: &ThresholdSet) -> Option<Warning> {
    let hot = over_threshold(readings, thresholds);
    if hot.is_empty() {
        return None;
    }

    let listing = hot
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    Some(Warning::new(
        CheckKind::Processes,
        format!("High CPU usage processes: [{listing}]"),
    ))
}
