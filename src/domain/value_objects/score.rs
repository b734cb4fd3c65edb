//! Page scores on a 0–100 scale, derived from vitals and SEO signals.

use crate::domain::entities::seo::SeoMetrics;
use crate::domain::entities::vitals::CoreWebVitals;

/// Extractor function: takes a vitals sample and returns a metric value.
pub type VitalExtractor = fn(&CoreWebVitals) -> f64;

/// Scored vitals: extractor, "good" bound, "poor" bound, weight.
const SCORED_VITALS: &[(VitalExtractor, f64, f64, f64)] = &[
    (|v| v.lcp, 2500.0, 4000.0, 0.25),
    (|v| v.fid, 100.0, 300.0, 0.25),
    (|v| v.cls, 0.1, 0.25, 0.25),
    (|v| v.fcp, 1800.0, 3000.0, 0.15),
    (|v| v.ttfb, 800.0, 1800.0, 0.10),
];

/// Minimum word count before a page stops being considered thin content.
pub const THIN_CONTENT_WORDS: usize = 300;

/// Weighted performance score. Each metric scores 100 at or below its "good"
/// bound, 0 at or above its "poor" bound, and linearly in between.
#[must_use]
pub fn performance_score(vitals: &CoreWebVitals) -> f64 {
    let total: f64 = SCORED_VITALS
        .iter()
        .map(|&(extract, good, poor, weight)| linear_score(extract(vitals), good, poor) * weight)
        .sum();
    round1(total)
}

fn linear_score(value: f64, good: f64, poor: f64) -> f64 {
    if value <= good {
        100.0
    } else if value >= poor {
        0.0
    } else {
        100.0 * (poor - value) / (poor - good)
    }
}

/// Deduction-based SEO score.
#[must_use]
pub fn seo_score(metrics: &SeoMetrics) -> f64 {
    let mut score: f64 = 100.0;

    if metrics.page_title.trim().is_empty() {
        score -= 20.0;
    }
    if metrics.meta_description.trim().is_empty() {
        score -= 15.0;
    }
    match metrics.h1_count {
        0 => score -= 15.0,
        1 => {}
        _ => score -= 5.0,
    }
    if metrics.alt_coverage().is_some_and(|c| c < 0.9) {
        score -= 10.0;
    }
    if metrics.word_count < THIN_CONTENT_WORDS {
        score -= 10.0;
    }
    if !metrics.structured_data_present {
        score -= 5.0;
    }
    if metrics.canonical_url.is_none() {
        score -= 5.0;
    }
    if metrics
        .meta_robots
        .as_deref()
        .is_some_and(|r| r.to_lowercase().contains("noindex"))
    {
        score -= 15.0;
    }

    score.clamp(0.0, 100.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
