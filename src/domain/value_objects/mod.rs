pub mod level;
pub mod thresholds;

pub use level::LogLevel;
pub use thresholds::ThresholdSet;
