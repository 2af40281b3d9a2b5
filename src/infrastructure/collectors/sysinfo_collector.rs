use std::sync::Mutex;
use std::time::Duration;

use sysinfo::{Pid, Process, ProcessStatus, System, MINIMUM_CPU_UPDATE_INTERVAL};

use super::disk_collector::DiskCollector;
use super::round_one_decimal;
use crate::domain::entities::process::{ProcessReading, ProcessRecord, SkipReason};
use crate::domain::ports::collector::{CollectionError, MetricsSource};

/// Returns `(numerator / denominator) * 100.0`, or `None` when `denominator` is zero.
#[allow(clippy::cast_precision_loss)]
fn checked_percent(numerator: u64, denominator: u64) -> Option<f64> {
    (denominator > 0).then(|| (numerator as f64 / denominator as f64) * 100.0)
}

/// Returns the arithmetic mean of `per_core` usages, or `None` when the slice is empty.
#[allow(clippy::cast_precision_loss)]
fn avg_cpu_usage(per_core: &[f32]) -> Option<f32> {
    let count = per_core.len();
    (count > 0).then(|| per_core.iter().sum::<f32>() / count as f32)
}

/// Metrics facility backed by the `sysinfo` crate.
///
/// Uses `Mutex<System>` for interior mutability since the `MetricsSource`
/// trait requires `&self` but `sysinfo::System` needs `&mut self` for refresh.
///
/// Per-process CPU is measured between two refreshes of the same `System`:
/// the one made at construction (or the previous enumeration) and the one
/// made by [`MetricsSource::processes`]. A process that first appears on the
/// latest refresh has no earlier sample and reads `0.0`. This staleness is
/// inherent to one-shot sampling and is reported as-is.
pub struct SysinfoCollector {
    sys: Mutex<System>,
    disk_collector: DiskCollector,
}

impl SysinfoCollector {
    /// Creates a new collector with pre-initialized system data.
    #[must_use]
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys: Mutex::new(sys),
            disk_collector: DiskCollector::new(),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, System>, CollectionError> {
        self.sys.lock().map_err(|e| {
            CollectionError::MetricsUnavailable(format!("system lock poisoned: {e}"))
        })
    }
}

impl Default for SysinfoCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSource for SysinfoCollector {
    fn cpu_percent(&self, window: Duration) -> Result<f64, CollectionError> {
        let mut sys = self.lock()?;
        sys.refresh_cpu_usage();
        std::thread::sleep(window.max(MINIMUM_CPU_UPDATE_INTERVAL));
        sys.refresh_cpu_usage();

        let per_core: Vec<f32> = sys.cpus().iter().map(sysinfo::Cpu::cpu_usage).collect();
        let usage = avg_cpu_usage(&per_core)
            .ok_or_else(|| CollectionError::MetricsUnavailable("no CPU reported".into()))?;
        Ok(round_one_decimal(f64::from(usage)))
    }

    fn memory_percent(&self) -> Result<f64, CollectionError> {
        let mut sys = self.lock()?;
        sys.refresh_memory();

        let total = sys.total_memory();
        let used = total.saturating_sub(sys.available_memory());
        checked_percent(used, total)
            .map(round_one_decimal)
            .ok_or_else(|| CollectionError::MetricsUnavailable("total memory is zero".into()))
    }

    fn disk_percent(&self, mount: &str) -> Result<f64, CollectionError> {
        self.disk_collector.usage_percent(mount)
    }

    fn processes(&self) -> Result<Vec<ProcessReading>, CollectionError> {
        let mut sys = self.lock()?;
        sys.refresh_all();

        let mut readings: Vec<ProcessReading> = sys
            .processes()
            .iter()
            .map(|(pid, proc_info)| read_process(*pid, proc_info))
            .collect();
        readings.sort_by_key(reading_pid);
        Ok(readings)
    }
}

fn read_process(pid: Pid, proc_info: &Process) -> ProcessReading {
    let pid = pid.as_u32();

    if matches!(proc_info.status(), ProcessStatus::Zombie | ProcessStatus::Dead) {
        return ProcessReading::Skipped {
            pid,
            reason: SkipReason::Exited,
        };
    }

    let cpu = proc_info.cpu_usage();
    if !cpu.is_finite() {
        return ProcessReading::Skipped {
            pid,
            reason: SkipReason::Unreadable,
        };
    }

    ProcessReading::Sampled(ProcessRecord {
        pid,
        name: proc_info.name().to_string_lossy().to_string(),
        cpu_percent: round_one_decimal(f64::from(cpu)),
    })
}

const fn reading_pid(reading: &ProcessReading) -> u32 {
    match reading {
        ProcessReading::Sampled(record) => record.pid,
        ProcessReading::Skipped { pid, .. } => *pid,
    }
}
