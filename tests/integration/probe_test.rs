#![allow(clippy::expect_used)]

use std::sync::Mutex;
use std::time::Duration;

use healthprobe::application::config::ProbeConfig;
use healthprobe::application::services::probe::HealthProbe;
use healthprobe::domain::entities::check::CheckKind;
use healthprobe::domain::entities::process::{ProcessReading, ProcessRecord, SkipReason};
use healthprobe::domain::entities::warning::Warning;
use healthprobe::domain::ports::collector::{CollectionError, MetricsSource};
use healthprobe::domain::ports::notifier::{NotificationError, Notifier};
use healthprobe::infrastructure::notifications::composite::CompositeNotifier;
use healthprobe::infrastructure::notifications::log_file::LogFileNotifier;

// ---------------------------------------------------------------------------
// ScriptedSource
// ---------------------------------------------------------------------------

struct ScriptedSource {
    cpu: f64,
    memory: f64,
    disk: Result<f64, String>,
    processes: Vec<ProcessReading>,
    calls: Mutex<Vec<CheckKind>>,
}

impl ScriptedSource {
    fn new(cpu: f64, memory: f64, disk: f64) -> Self {
        Self {
            cpu,
            memory,
            disk: Ok(disk),
            processes: vec![],
            calls: Mutex::new(vec![]),
        }
    }

    fn with_processes(mut self, processes: Vec<ProcessReading>) -> Self {
        self.processes = processes;
        self
    }

    fn with_disk_denied(mut self) -> Self {
        self.disk = Err("/".to_string());
        self
    }

    fn calls(&self) -> Vec<CheckKind> {
        self.calls.lock().expect("lock").clone()
    }
}

impl MetricsSource for ScriptedSource {
    fn cpu_percent(&self, _window: Duration) -> Result<f64, CollectionError> {
        self.calls.lock().expect("lock").push(CheckKind::Cpu);
        Ok(self.cpu)
    }

    fn memory_percent(&self) -> Result<f64, CollectionError> {
        self.calls.lock().expect("lock").push(CheckKind::Memory);
        Ok(self.memory)
    }

    fn disk_percent(&self, _mount: &str) -> Result<f64, CollectionError> {
        self.calls.lock().expect("lock").push(CheckKind::Disk);
        self.disk
            .clone()
            .map_err(CollectionError::PermissionDenied)
    }

    fn processes(&self) -> Result<Vec<ProcessReading>, CollectionError> {
        self.calls.lock().expect("lock").push(CheckKind::Processes);
        Ok(self.processes.clone())
    }
}

// ---------------------------------------------------------------------------
// TrackingNotifier
// ---------------------------------------------------------------------------

struct TrackingNotifier {
    warnings: Mutex<Vec<Warning>>,
}

impl TrackingNotifier {
    const fn new() -> Self {
        Self {
            warnings: Mutex::new(vec![]),
        }
    }

    fn collected(&self) -> Vec<Warning> {
        self.warnings.lock().expect("lock").clone()
    }
}

impl Notifier for TrackingNotifier {
    fn notify(&self, warning: &Warning) -> Result<(), NotificationError> {
        self.warnings.lock().expect("lock").push(warning.clone());
        Ok(())
    }
}

fn sampled(pid: u32, name: &str, cpu_percent: f64) -> ProcessReading {
    ProcessReading::Sampled(ProcessRecord {
        pid,
        name: name.to_string(),
        cpu_percent,
    })
}

fn log_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("read log")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Drops the `<timestamp> - ` prefix of a log line.
fn without_timestamp(line: &str) -> &str {
    line.split_once(" - ").map_or(line, |(_, rest)| rest)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn high_cpu_only_logs_one_warning() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log_path = dir.path().join("system_health.log");
    let config = ProbeConfig {
        log_path: log_path.to_string_lossy().to_string(),
        ..ProbeConfig::default()
    };
    let source = ScriptedSource::new(85.0, 10.0, 10.0);
    let log_file = LogFileNotifier::open(&config.log_path).expect("open log");
    let probe = HealthProbe::new(&source, &log_file, &config);

    let report = probe.run().expect("run");

    assert_eq!(report.warnings.len(), 1);
    let lines = log_lines(&log_path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("85.0"));
    assert_eq!(
        without_timestamp(&lines[0]),
        "WARNING - CPU usage is high: 85.0%"
    );
}

#[test]
fn high_memory_only_warns_about_memory() {
    let source = ScriptedSource::new(10.0, 50.0, 10.0);
    let notifier = TrackingNotifier::new();
    let config = ProbeConfig::default();
    let probe = HealthProbe::new(&source, &notifier, &config);

    probe.run().expect("run");

    let warnings = notifier.collected();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].check, CheckKind::Memory);
    assert!(warnings[0].message.contains("Memory"));
    assert!(warnings[0].message.contains("50.0"));
}

#[test]
fn healthy_host_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log_path = dir.path().join("system_health.log");
    let config = ProbeConfig {
        log_path: log_path.to_string_lossy().to_string(),
        ..ProbeConfig::default()
    };
    let source = ScriptedSource::new(10.0, 10.0, 10.0).with_processes(vec![
        sampled(1, "systemd", 0.0),
        sampled(200, "sshd", 80.0),
    ]);
    let log_file = LogFileNotifier::open(&config.log_path).expect("open log");
    let probe = HealthProbe::new(&source, &log_file, &config);

    let report = probe.run().expect("run");

    assert!(report.warnings.is_empty());
    assert!(log_lines(&log_path).is_empty());
}

#[test]
fn disk_failure_aborts_before_process_check() {
    let source = ScriptedSource::new(10.0, 10.0, 10.0)
        .with_processes(vec![sampled(42, "spinner", 99.0)])
        .with_disk_denied();
    let notifier = TrackingNotifier::new();
    let config = ProbeConfig::default();
    let probe = HealthProbe::new(&source, &notifier, &config);

    let result = probe.run();

    assert!(matches!(result, Err(CollectionError::PermissionDenied(_))));
    assert_eq!(
        source.calls(),
        vec![CheckKind::Cpu, CheckKind::Memory, CheckKind::Disk]
    );
    assert!(notifier
        .collected()
        .iter()
        .all(|w| w.check != CheckKind::Processes));
}

#[test]
fn every_check_runs_once_in_order_even_when_all_warn() {
    let source = ScriptedSource::new(99.0, 99.0, 99.0)
        .with_processes(vec![sampled(7, "burner", 150.0)]);
    let notifier = TrackingNotifier::new();
    let config = ProbeConfig::default();
    let probe = HealthProbe::new(&source, &notifier, &config);

    let report = probe.run().expect("run");

    assert_eq!(source.calls(), CheckKind::ALL.to_vec());
    let order: Vec<CheckKind> = report.warnings.iter().map(|w| w.check).collect();
    assert_eq!(order, CheckKind::ALL.to_vec());
    assert_eq!(notifier.collected().len(), 4);
}

#[test]
fn process_warning_lists_only_qualifying_processes() {
    let source = ScriptedSource::new(10.0, 10.0, 10.0).with_processes(vec![
        sampled(10, "idle", 0.3),
        ProcessReading::Skipped {
            pid: 11,
            reason: SkipReason::Exited,
        },
        sampled(12, "stress", 97.5),
        sampled(13, "edge", 80.0),
    ]);
    let notifier = TrackingNotifier::new();
    let config = ProbeConfig::default();
    let probe = HealthProbe::new(&source, &notifier, &config);

    let warning = probe
        .check_processes()
        .expect("processes")
        .expect("warning");

    assert_eq!(
        warning.message,
        "High CPU usage processes: [{'pid': 12, 'name': 'stress', 'cpu_percent': 97.5}]"
    );
    assert_eq!(notifier.collected().len(), 1);
}

#[test]
fn repeated_cycles_log_identical_entries_apart_from_timestamp() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log_path = dir.path().join("system_health.log");
    let config = ProbeConfig {
        log_path: log_path.to_string_lossy().to_string(),
        ..ProbeConfig::default()
    };
    let source = ScriptedSource::new(10.0, 10.0, 72.0);
    let log_file = LogFileNotifier::open(&config.log_path).expect("open log");
    let composite = CompositeNotifier::new(vec![Box::new(log_file)]);
    let probe = HealthProbe::new(&source, &composite, &config);

    probe.run().expect("first run");
    probe.run().expect("second run");

    let lines = log_lines(&log_path);
    assert_eq!(lines.len(), 2);
    assert_eq!(without_timestamp(&lines[0]), without_timestamp(&lines[1]));
    assert_eq!(
        without_timestamp(&lines[0]),
        "WARNING - Disk usage is high: 72.0%"
    );
}

#[test]
fn process_name_with_newline_logs_a_single_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log_path = dir.path().join("system_health.log");
    let config = ProbeConfig {
        log_path: log_path.to_string_lossy().to_string(),
        ..ProbeConfig::default()
    };
    let source = ScriptedSource::new(10.0, 10.0, 10.0).with_processes(vec![sampled(
        66,
        "evil\n2024-01-01 00:00:00,000 - WARNING - forged",
        99.0,
    )]);
    let log_file = LogFileNotifier::open(&config.log_path).expect("open log");
    let probe = HealthProbe::new(&source, &log_file, &config);

    probe.run().expect("run");

    let lines = log_lines(&log_path);
    assert_eq!(lines.len(), 1);
    assert_eq!(
        without_timestamp(&lines[0]),
        "WARNING - High CPU usage processes: [{'pid': 66, \
         'name': 'evil\\n2024-01-01 00:00:00,000 - WARNING - forged', 'cpu_percent': 99.0}]"
    );
}
