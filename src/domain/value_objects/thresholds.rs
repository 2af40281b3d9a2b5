/// Percentages above which a metric is considered unhealthy.
///
/// Comparisons are strict: a reading equal to its threshold is healthy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSet {
    /// Aggregate and per-process CPU usage percentage
    pub cpu: f64,
    /// Memory usage percentage
    pub memory: f64,
    /// Usage percentage of the monitored mount
    pub disk: f64,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            cpu: 80.0,
            memory: 40.0,
            disk: 60.0,
        }
    }
}
