use std::time::Duration;

use crate::application::config::ProbeConfig;
use crate::domain::entities::check::CheckKind;
use crate::domain::entities::process::ProcessReading;
use crate::domain::entities::warning::Warning;
use crate::domain::ports::collector::{CollectionError, MetricsSource};
use crate::domain::ports::notifier::Notifier;
use crate::domain::rules::{cpu, disk, memory, processes};
use crate::domain::value_objects::thresholds::ThresholdSet;

/// Wall-clock window the aggregate CPU sample is averaged over.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Result of a single probe cycle.
#[derive(Debug, Default)]
pub struct CycleReport {
    /// Warnings emitted, in check order.
    pub warnings: Vec<Warning>,
    /// Processes left out of the process check because they could not be read.
    pub processes_skipped: usize,
}

/// Samples the host once per check and records threshold violations.
///
/// Each check is independent: a warning never stops the next check, a
/// `CollectionError` stops everything.
pub struct HealthProbe<'a> {
    source: &'a dyn MetricsSource,
    notifier: &'a dyn Notifier,
    thresholds: ThresholdSet,
    disk_mount: &'a str,
}

impl<'a> HealthProbe<'a> {
    #[must_use]
    pub fn new(
        source: &'a dyn MetricsSource,
        notifier: &'a dyn Notifier,
        config: &'a ProbeConfig,
    ) -> Self {
        Self {
            source,
            notifier,
            thresholds: config.thresholds(),
            disk_mount: &config.disk_mount,
        }
    }

    /// Samples aggregate CPU over [`CPU_SAMPLE_WINDOW`], blocking for it.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if CPU statistics are unavailable.
    pub fn check_cpu(&self) -> Result<Option<Warning>, CollectionError> {
        let usage = self.source.cpu_percent(CPU_SAMPLE_WINDOW)?;
        tracing::debug!(usage, "cpu sampled");
        Ok(self.record(cpu::evaluate(usage, &self.thresholds)))
    }

    /// # Errors
    ///
    /// Returns `CollectionError` if memory statistics are unavailable.
    pub fn check_memory(&self) -> Result<Option<Warning>, CollectionError> {
        let usage = self.source.memory_percent()?;
        tracing::debug!(usage, "memory sampled");
        Ok(self.record(memory::evaluate(usage, &self.thresholds)))
    }

    /// Reads usage of the configured mount (`/` by default).
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if the mount is missing or unreadable.
    pub fn check_disk(&self) -> Result<Option<Warning>, CollectionError> {
        let usage = self.source.disk_percent(self.disk_mount)?;
        tracing::debug!(usage, mount = self.disk_mount, "disk sampled");
        Ok(self.record(disk::evaluate(usage, &self.thresholds)))
    }

    /// # Errors
    ///
    /// Returns `CollectionError` if the process table cannot be listed.
    pub fn check_processes(&self) -> Result<Option<Warning>, CollectionError> {
        self.check_processes_counting().map(|(warning, _)| warning)
    }

    fn check_processes_counting(&self) -> Result<(Option<Warning>, usize), CollectionError> {
        let readings = self.source.processes()?;
        let mut skipped = 0usize;
        for reading in &readings {
            if let ProcessReading::Skipped { pid, reason } = reading {
                tracing::trace!(pid, %reason, "process skipped");
                skipped += 1;
            }
        }
        tracing::debug!(total = readings.len(), skipped, "processes enumerated");
        let warning = self.record(processes::evaluate(&readings, &self.thresholds));
        Ok((warning, skipped))
    }

    /// Runs every check once, in [`CheckKind::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns the first `CollectionError`; later checks do not run.
    pub fn run(&self) -> Result<CycleReport, CollectionError> {
        let mut report = CycleReport::default();

        for kind in CheckKind::ALL {
            tracing::debug!(check = %kind, "running check");
            let warning = match kind {
                CheckKind::Cpu => self.check_cpu()?,
                CheckKind::Memory => self.check_memory()?,
                CheckKind::Disk => self.check_disk()?,
                CheckKind::Processes => {
                    let (warning, skipped) = self.check_processes_counting()?;
                    report.processes_skipped = skipped;
                    warning
                }
            };
            report.warnings.extend(warning);
        }

        if report.warnings.is_empty() {
            tracing::debug!("System OK, no warnings");
        }

        Ok(report)
    }

    /// Hands a warning to the sink. A failing sink is logged, never fatal.
    fn record(&self, warning: Option<Warning>) -> Option<Warning> {
        if let Some(ref w) = warning {
            if let Err(e) = self.notifier.notify(w) {
                tracing::warn!("Warning notification failed: {e}");
            }
        }
        warning
    }
}
