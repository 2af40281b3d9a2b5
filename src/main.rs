use clap::Parser;
use tracing_subscriber::EnvFilter;

use healthprobe::application::config::ProbeConfig;
use healthprobe::application::services::probe::HealthProbe;
use healthprobe::infrastructure::collectors::sysinfo_collector::SysinfoCollector;
use healthprobe::infrastructure::notifications::composite::CompositeNotifier;
use healthprobe::infrastructure::notifications::log_file::LogFileNotifier;
use healthprobe::infrastructure::notifications::terminal::TerminalNotifier;
use healthprobe::presentation::cli::app::Cli;

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    setup_tracing();

    let config = ProbeConfig::default();

    // Manual DI: main.rs is the only place that knows concrete types
    let collector = SysinfoCollector::new();
    let log_file = LogFileNotifier::open(&config.log_path)?;
    let notifier = CompositeNotifier::new(vec![
        Box::new(TerminalNotifier::new()),
        Box::new(log_file),
    ]);

    let probe = HealthProbe::new(&collector, &notifier, &config);
    let report = probe.run()?;
    tracing::debug!(
        warnings = report.warnings.len(),
        processes_skipped = report.processes_skipped,
        "cycle complete"
    );

    Ok(())
}
