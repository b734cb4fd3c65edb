use serde::Serialize;

use crate::application::services::monitor::MonitorService;
use crate::domain::entities::report::PerformanceReport;
use crate::domain::entities::snapshot::MonitoringSnapshot;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::presentation::cli::formatters::alert_fmt::{self, sanitize_terminal};
use crate::presentation::cli::formatters::report_fmt;
use crate::presentation::cli::formatters::status_fmt::print_section_header;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanOutput<'a> {
    snapshot: &'a MonitoringSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a PerformanceReport>,
}

/// Runs a one-shot page scan: measure vitals, analyze signals, display alerts.
///
/// # Errors
///
/// Returns an error if the report cannot be built or JSON serialization fails.
pub async fn run_scan(
    service: &MonitorService<'_>,
    thresholds: &ThresholdSet,
    json: bool,
    with_report: bool,
) -> anyhow::Result<()> {
    let snapshot = service.collect(None).await;
    let report = if with_report {
        Some(
            service
                .generate_performance_report()
                .map_err(|e| anyhow::anyhow!("failed to build report: {e}"))?,
        )
    } else {
        None
    };

    if json {
        let output = ScanOutput {
            snapshot: &snapshot,
            report: report.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_scan_human(&snapshot, thresholds);
        if let Some(ref report) = report {
            report_fmt::print_report(report, thresholds);
        }
    }

    Ok(())
}

fn print_scan_human(snapshot: &MonitoringSnapshot, thresholds: &ThresholdSet) {
    print_section_header(&format!("🔍 Page scan: {}", sanitize_terminal(&snapshot.url)));
    println!();
    report_fmt::print_vitals(&snapshot.core_web_vitals, thresholds);
    report_fmt::print_seo(&snapshot.seo_metrics);
    if snapshot.alerts.is_empty() {
        alert_fmt::print_no_alerts();
    } else {
        println!("{} alert(s) raised:", snapshot.alerts.len());
        alert_fmt::format_alerts(&snapshot.alerts);
    }
}
