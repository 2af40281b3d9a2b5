use clap::Parser;

/// healthprobe, a one-shot host health check
///
/// Samples CPU (over one second), memory, root-disk and per-process CPU
/// usage once, printing and logging a warning for every fixed threshold
/// that is exceeded. Always exits 0 unless a metric cannot be read.
#[derive(Parser, Debug)]
#[command(name = "healthprobe")]
#[command(version, about, long_about)]
pub struct Cli {}
