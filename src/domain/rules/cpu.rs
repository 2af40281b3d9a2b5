use crate::domain::entities::check::CheckKind;
use crate::domain::entities::warning::Warning;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::{exceeds, format_percent};

/// Warns when the 1-second aggregate CPU sample is above `thresholds.cpu`.
#[must_use]
pub fn evaluate(usage_percent: f64, thresholds: &ThresholdSet) -> Option<Warning> {
    exceeds(usage_percent, thresholds.cpu).then(|| {
        Warning::new(
            CheckKind::Cpu,
            format!("CPU usage is high: {}%", format_percent(usage_percent)),
        )
    })
}
