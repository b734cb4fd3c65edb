use serde::{Deserialize, Serialize};

/// Core Web Vitals sample for a single page view.
///
/// Timings are in milliseconds, `cls` is a dimensionless layout-shift score.
/// Metrics that were never reported are `0.0`, never missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreWebVitals {
    /// Largest Contentful Paint
    pub lcp: f64,
    /// First Input Delay
    pub fid: f64,
    /// Cumulative Layout Shift
    pub cls: f64,
    /// First Contentful Paint
    pub fcp: f64,
    /// Time To First Byte
    pub ttfb: f64,
}

impl CoreWebVitals {
    /// All-zero sample, used when no instrumentation is available.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            lcp: 0.0,
            fid: 0.0,
            cls: 0.0,
            fcp: 0.0,
            ttfb: 0.0,
        }
    }
}

/// Clamp a raw measurement to a non-negative finite value.
#[must_use]
pub fn sanitize_metric(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
