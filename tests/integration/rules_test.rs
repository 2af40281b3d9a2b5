#![allow(clippy::expect_used)]

use healthprobe::domain::entities::process::{ProcessReading, ProcessRecord};
use healthprobe::domain::rules::{cpu, disk, memory, processes};
use healthprobe::domain::value_objects::thresholds::ThresholdSet;

/// Readings from 0.0 to 120.0 in 0.1 steps, built from integers to avoid drift.
fn sweep() -> impl Iterator<Item = f64> {
    (0..=1200).map(|tenths| f64::from(tenths) / 10.0)
}

#[test]
fn cpu_warns_iff_above_80() {
    let t = ThresholdSet::default();
    for c in sweep() {
        let warning = cpu::evaluate(c, &t);
        assert_eq!(warning.is_some(), c > 80.0, "cpu reading {c}");
        if let Some(w) = warning {
            assert!(w.message.starts_with("CPU usage is high: "));
            assert!(w.message.ends_with('%'));
        }
    }
}

#[test]
fn memory_warns_iff_above_40() {
    let t = ThresholdSet::default();
    for m in sweep() {
        assert_eq!(memory::evaluate(m, &t).is_some(), m > 40.0, "memory reading {m}");
    }
}

#[test]
fn disk_warns_iff_above_60() {
    let t = ThresholdSet::default();
    for d in sweep() {
        assert_eq!(disk::evaluate(d, &t).is_some(), d > 60.0, "disk reading {d}");
    }
}

#[test]
fn warning_message_carries_the_reading() {
    let t = ThresholdSet::default();
    let cases = [(80.1, "80.1"), (85.0, "85.0"), (99.9, "99.9"), (100.0, "100.0")];
    for (value, text) in cases {
        let w = cpu::evaluate(value, &t).expect("should warn");
        assert_eq!(w.message, format!("CPU usage is high: {text}%"));
    }
}

#[test]
fn process_result_set_is_exactly_the_hot_processes() {
    let t = ThresholdSet::default();
    let readings: Vec<ProcessReading> = (0..=200)
        .map(|pid| {
            ProcessReading::Sampled(ProcessRecord {
                pid,
                name: format!("proc{pid}"),
                cpu_percent: f64::from(pid),
            })
        })
        .collect();

    let hot: Vec<u32> = processes::over_threshold(&readings, &t)
        .iter()
        .map(|p| p.pid)
        .collect();
    let expected: Vec<u32> = (81..=200).collect();
    assert_eq!(hot, expected);
}
