use crate::domain::entities::check::CheckKind;
use crate::domain::entities::warning::Warning;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::{exceeds, format_percent};

/// Checked against the single monitored mount, not every filesystem.
#[must_use]
pub fn evaluate(usage_percent: f64, thresholds: &ThresholdSet) -> Option<Warning> {
    exceeds(usage_percent, thresholds.disk).then(|| {
        Warning::new(
            CheckKind::Disk,
            format!("Disk usage is high: {}%", format_percent(usage_percent)),
        )
    })
}
