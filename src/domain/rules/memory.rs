use crate::domain::entities::check::CheckKind;
use crate::domain::entities::warning::Warning;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::{exceeds, format_percent};

#[must_use]
pub fn evaluate(usage_percent: f64, thresholds: &ThresholdSet) -> Option<Warning> {
    exceeds(usage_percent, thresholds.memory).then(|| {
        Warning::new(
            CheckKind::Memory,
            format!("Memory usage is high: {}%", format_percent(usage_percent)),
        )
    })
}
