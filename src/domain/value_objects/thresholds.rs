use serde::{Deserialize, Serialize};

/// Bounds beyond which a page metric is considered problematic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    /// Largest Contentful Paint, in milliseconds
    pub lcp_ms: f64,
    /// First Input Delay, in milliseconds
    pub fid_ms: f64,
    /// Cumulative Layout Shift score
    pub cls: f64,
    /// First Contentful Paint, in milliseconds
    pub fcp_ms: f64,
    /// Time To First Byte, in milliseconds
    pub ttfb_ms: f64,
    /// Minimum acceptable SEO score (0–100); `None` disables the check
    pub seo_score: Option<f64>,
    /// Minimum acceptable performance score (0–100)
    pub performance_score: f64,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            lcp_ms: 2500.0,
            fid_ms: 100.0,
            cls: 0.1,
            fcp_ms: 1800.0,
            ttfb_ms: 800.0,
            seo_score: Some(70.0),
            performance_score: 90.0,
        }
    }
}
