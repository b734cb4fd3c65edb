use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rolling report over the most recent snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    pub trends: ReportTrends,
    pub recommendations: Vec<String>,
}

/// Windowed averages. Every field is `0` when the window is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_pages: usize,
    pub average_lcp: f64,
    pub average_fid: f64,
    pub average_cls: f64,
    pub average_fcp: f64,
    pub average_ttfb: f64,
    pub average_performance_score: f64,
    pub average_seo_score: f64,
    pub active_alerts: usize,
}

/// Parallel per-snapshot series, oldest first, for charting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTrends {
    pub timestamps: Vec<DateTime<Utc>>,
    pub lcp: Vec<f64>,
    pub fid: Vec<f64>,
    pub cls: Vec<f64>,
}
