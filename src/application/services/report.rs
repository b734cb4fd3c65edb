use chrono::Utc;

use crate::domain::entities::report::{PerformanceReport, ReportSummary, ReportTrends};
use crate::domain::entities::snapshot::MonitoringSnapshot;
use crate::domain::entities::vitals::CoreWebVitals;
use crate::domain::value_objects::score::{VitalExtractor, performance_score, seo_score};
use crate::domain::value_objects::thresholds::ThresholdSet;

/// Number of most recent snapshots a report covers.
pub const DEFAULT_REPORT_WINDOW: usize = 10;

/// Synthesizes rolling averages, trend series and recommendations.
pub struct ReportGenerator {
    window: usize,
}

impl ReportGenerator {
    #[must_use]
    pub const fn new(window: usize) -> Self {
        Self { window }
    }

    #[must_use]
    pub const fn window(&self) -> usize {
        self.window
    }

    /// Build a report over the last `window` entries of `history`
    /// (chronological). An empty history produces a zeroed summary.
    #[must_use]
    pub fn generate(
        &self,
        history: &[MonitoringSnapshot],
        active_alerts: usize,
        thresholds: &ThresholdSet,
    ) -> PerformanceReport {
        let start = history.len().saturating_sub(self.window);
        let recent = &history[start..];

        let vitals: Vec<&CoreWebVitals> = recent.iter().map(|s| &s.core_web_vitals).collect();
        let average_of = |extract: VitalExtractor| mean(vitals.iter().map(|v| extract(v)));

        let summary = ReportSummary {
            total_pages: recent.len(),
            average_lcp: average_of(|v| v.lcp),
            average_fid: average_of(|v| v.fid),
            average_cls: average_of(|v| v.cls),
            average_fcp: average_of(|v| v.fcp),
            average_ttfb: average_of(|v| v.ttfb),
            average_performance_score: mean(vitals.iter().map(|v| performance_score(v))),
            average_seo_score: mean(recent.iter().map(|s| seo_score(&s.seo_metrics))),
            active_alerts,
        };

        let trends = ReportTrends {
            timestamps: recent.iter().map(|s| s.timestamp).collect(),
            lcp: vitals.iter().map(|v| v.lcp).collect(),
            fid: vitals.iter().map(|v| v.fid).collect(),
            cls: vitals.iter().map(|v| v.cls).collect(),
        };

        let recommendations = if recent.is_empty() {
            Vec::new()
        } else {
            recommendations(&summary, thresholds)
        };

        tracing::debug!(
            "Report over {} snapshot(s): {} recommendation(s)",
            summary.total_pages,
            recommendations.len()
        );

        PerformanceReport {
            generated_at: Utc::now(),
            summary,
            trends,
            recommendations,
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_WINDOW)
    }
}

/// Arithmetic mean; `0.0` for an empty sequence.
#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

fn recommendations(summary: &ReportSummary, thresholds: &ThresholdSet) -> Vec<String> {
    let mut out = Vec::new();

    if summary.average_lcp > thresholds.lcp_ms {
        out.push(format!(
            "Average LCP is {:.0}ms (threshold {:.0}ms): optimize hero images, preload key \
             resources and reduce render-blocking CSS/JS.",
            summary.average_lcp, thresholds.lcp_ms
        ));
    }
    if summary.average_fid > thresholds.fid_ms {
        out.push(format!(
            "Average FID is {:.0}ms (threshold {:.0}ms): break up long main-thread tasks and \
             defer non-critical JavaScript.",
            summary.average_fid, thresholds.fid_ms
        ));
    }
    if summary.average_cls > thresholds.cls {
        out.push(format!(
            "Average CLS is {:.3} (threshold {:.3}): reserve space for images, embeds and \
             late-loading content.",
            summary.average_cls, thresholds.cls
        ));
    }
    if summary.average_fcp > thresholds.fcp_ms {
        out.push(format!(
            "Average FCP is {:.0}ms (threshold {:.0}ms): inline critical CSS and trim fonts \
             loaded before first paint.",
            summary.average_fcp, thresholds.fcp_ms
        ));
    }
    if summary.average_ttfb > thresholds.ttfb_ms {
        out.push(format!(
            "Average TTFB is {:.0}ms (threshold {:.0}ms): cache pages at the edge and reduce \
             server response time.",
            summary.average_ttfb, thresholds.ttfb_ms
        ));
    }
    if summary.average_performance_score < thresholds.performance_score {
        out.push(format!(
            "Average performance score is {:.0} (target {:.0}): address the slowest vitals first.",
            summary.average_performance_score, thresholds.performance_score
        ));
    }

    out
}
