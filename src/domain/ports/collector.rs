use std::time::Duration;

use thiserror::Error;

use crate::domain::entities::process::ProcessReading;

/// The metrics facility could not answer a query.
///
/// A probe cycle never recovers from this: it aborts the run.
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("failed to collect system metrics: {0}")]
    MetricsUnavailable(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("no filesystem mounted at {0}")]
    MountNotFound(String),
}

/// Read side of the OS metrics facility.
///
/// Percentages are reported rounded to one decimal place.
pub trait MetricsSource: Send + Sync {
    /// Aggregate CPU usage measured over `window`. Blocks for the whole window.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if CPU statistics are unavailable.
    fn cpu_percent(&self, window: Duration) -> Result<f64, CollectionError>;

    /// Instantaneous virtual-memory usage.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if memory statistics are unavailable.
    fn memory_percent(&self) -> Result<f64, CollectionError>;

    /// Usage of the filesystem mounted at `mount`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::MountNotFound` if nothing is mounted there,
    /// or another variant if the mount cannot be read.
    fn disk_percent(&self, mount: &str) -> Result<f64, CollectionError>;

    /// Every running process, one reading each.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` only if the process table itself cannot be
    /// listed; individual processes that vanish are `ProcessReading::Skipped`.
    fn processes(&self) -> Result<Vec<ProcessReading>, CollectionError>;
}
