use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::alert::Alert;
use super::seo::SeoMetrics;
use super::vitals::CoreWebVitals;

/// One complete measurement-plus-analysis result for a page view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringSnapshot {
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub core_web_vitals: CoreWebVitals,
    pub seo_metrics: SeoMetrics,
    /// Alerts raised for this snapshot only.
    pub alerts: Vec<Alert>,
}
