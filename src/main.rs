use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use sitepulse::application::config::AppConfig;
use sitepulse::application::services::monitor::MonitorService;
use sitepulse::application::services::page_signals::PageSignalAnalyzer;
use sitepulse::application::services::report::ReportGenerator;
use sitepulse::application::services::vitals::VitalsCollector;
use sitepulse::domain::rules::{RuleEngine, default_rules};
use sitepulse::domain::value_objects::thresholds::ThresholdSet;
use sitepulse::infrastructure::capture::PageCapture;
use sitepulse::infrastructure::persistence::in_memory_store::InMemoryStore;
use sitepulse::presentation::cli::app::{Cli, Commands};
use sitepulse::presentation::cli::commands::scan::run_scan;
use sitepulse::presentation::cli::commands::signals::run_signals;
use sitepulse::presentation::cli::commands::watch::run_watch;

fn print_banner() {
    println!("{}", "━".repeat(40).cyan());
    println!("{}", "  SITEPULSE · Page Experience Monitor".bold().cyan());
    println!("{}", "━".repeat(40).cyan());
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Commands that drive the full monitoring pipeline.
enum MonitorCommand {
    Scan { json: bool, report: bool },
    Watch { interval_secs: u64, cycles: Option<u64> },
}

async fn run_monitor(
    config: &AppConfig,
    capture_path: &Path,
    command: MonitorCommand,
) -> anyhow::Result<()> {
    let capture = PageCapture::load_from(capture_path)?;

    // Manual DI: main.rs is the only place that knows concrete types
    let vitals = VitalsCollector::new(&capture.timings, config.measure_timeout());
    let analyzer = PageSignalAnalyzer::new(config.analyzer.keywords.clone());
    let rule_engine = RuleEngine::new(default_rules());
    let thresholds = ThresholdSet::from(&config.thresholds);
    let report = ReportGenerator::new(config.report_window());
    let store = InMemoryStore::new();
    let service = MonitorService::new(
        &vitals,
        &analyzer,
        &capture.document,
        &rule_engine,
        &thresholds,
        &report,
        &store,
        &store,
    );

    match command {
        MonitorCommand::Scan {
            json,
            report: with_report,
        } => run_scan(&service, &thresholds, json, with_report).await,
        MonitorCommand::Watch {
            interval_secs,
            cycles,
        } => {
            print_banner();
            run_watch(&service, &thresholds, interval_secs, cycles).await
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // Load configuration
    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };

    match cli.command {
        Commands::Scan {
            capture,
            json,
            report,
        } => {
            run_monitor(&config, &capture, MonitorCommand::Scan { json, report }).await?;
        }
        Commands::Signals { capture, json } => {
            let capture = PageCapture::load_from(&capture)?;
            let analyzer = PageSignalAnalyzer::new(config.analyzer.keywords.clone());
            run_signals(&analyzer, &capture.document, json)?;
        }
        Commands::Watch {
            capture,
            interval,
            cycles,
        } => {
            let interval_secs = interval.unwrap_or(config.general.interval_secs);
            run_monitor(
                &config,
                &capture,
                MonitorCommand::Watch {
                    interval_secs,
                    cycles,
                },
            )
            .await?;
        }
    }

    Ok(())
}
