use std::io::ErrorKind;
use std::path::Path;
use std::sync::Mutex;

use sysinfo::Disks;

use super::round_one_decimal;
use crate::domain::ports::collector::CollectionError;

/// Reads filesystem usage for a single mount point using `sysinfo`.
pub struct DiskCollector {
    disks: Mutex<Disks>,
}

impl DiskCollector {
    /// Creates a new collector with a pre-refreshed disk list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            disks: Mutex::new(Disks::new_with_refreshed_list()),
        }
    }

    /// Usage percentage of the filesystem mounted exactly at `mount`.
    ///
    /// When a mount point is stacked, the most recently mounted entry wins.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::PermissionDenied` if the mount point cannot
    /// be accessed, `MountNotFound` if nothing is mounted at `mount`,
    /// `MetricsUnavailable` if the mount reports no capacity or the internal
    /// mutex is poisoned.
    #[allow(clippy::cast_precision_loss)]
    pub fn usage_percent(&self, mount: &str) -> Result<f64, CollectionError> {
        std::fs::metadata(mount).map_err(|e| access_error(mount, &e))?;

        let mut disks = self
            .disks
            .lock()
            .map_err(|e| CollectionError::MetricsUnavailable(format!("disk lock poisoned: {e}")))?;
        disks.refresh();

        let disk = disks
            .iter()
            .rev()
            .find(|d| d.mount_point() == Path::new(mount))
            .ok_or_else(|| CollectionError::MountNotFound(mount.to_string()))?;

        let total = disk.total_space();
        if total == 0 {
            return Err(CollectionError::MetricsUnavailable(format!(
                "{mount} reports zero capacity"
            )));
        }
        let used = total.saturating_sub(disk.available_space());
        Ok(round_one_decimal((used as f64 / total as f64) * 100.0))
    }
}

/// Maps a failed `stat` of the mount point onto `CollectionError`.
fn access_error(mount: &str, err: &std::io::Error) -> CollectionError {
    match err.kind() {
        ErrorKind::PermissionDenied => CollectionError::PermissionDenied(format!("{mount}: {err}")),
        ErrorKind::NotFound => CollectionError::MountNotFound(mount.to_string()),
        _ => CollectionError::MetricsUnavailable(format!("cannot stat {mount}: {err}")),
    }
}

impl Default for DiskCollector {
    fn default() -> Self {
        Self::new()
    }
}
