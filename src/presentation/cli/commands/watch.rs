use std::time::Duration;

use colored::Colorize;

use crate::application::services::monitor::MonitorService;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::presentation::cli::formatters::report_fmt;

/// Collect snapshots at a fixed interval and print a report on exit.
///
/// Runs until `cycles` snapshots have been collected, or until Ctrl+C when
/// `cycles` is `None`. Each cycle is one measurement; a slow cycle delays the
/// next tick instead of overlapping it.
///
/// # Errors
///
/// Returns an error if the closing report cannot be built.
pub async fn run_watch(
    service: &MonitorService<'_>,
    thresholds: &ThresholdSet,
    interval_secs: u64,
    cycles: Option<u64>,
) -> anyhow::Result<()> {
    let interval_secs = interval_secs.max(1);
    tracing::info!("Watch started (interval: {interval_secs}s)");
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut completed: u64 = 0;
    loop {
        if cycles.is_some_and(|max| completed >= max) {
            break;
        }
        tokio::select! {
            _ = interval.tick() => {
                let snapshot = service.collect(None).await;
                completed += 1;
                tracing::info!(
                    "Cycle {completed} done: {} alert(s), lcp={:.0}ms cls={:.3}",
                    snapshot.alerts.len(),
                    snapshot.core_web_vitals.lcp,
                    snapshot.core_web_vitals.cls
                );
            }
            _ = &mut shutdown => {
                tracing::info!("Shutdown signal received, stopping watch");
                println!("\n{}", "Stopping sitepulse...".dimmed());
                break;
            }
        }
    }

    let report = service
        .generate_performance_report()
        .map_err(|e| anyhow::anyhow!("failed to build report: {e}"))?;
    report_fmt::print_report(&report, thresholds);
    Ok(())
}
