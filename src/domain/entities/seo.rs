use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// On-page SEO signals extracted from a rendered document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetrics {
    pub page_title: String,
    pub meta_description: String,
    pub h1_count: usize,
    pub h2_count: usize,
    pub image_count: usize,
    pub images_with_alt: usize,
    pub internal_links: usize,
    pub external_links: usize,
    pub word_count: usize,
    /// Percentage (0–100) of words containing each tracked keyword.
    pub keyword_density: BTreeMap<String, f64>,
    pub structured_data_present: bool,
    pub canonical_url: Option<String>,
    pub meta_robots: Option<String>,
}

impl SeoMetrics {
    /// Share of images carrying alt text, `None` when the page has no images.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn alt_coverage(&self) -> Option<f64> {
        if self.image_count == 0 {
            None
        } else {
            Some(self.images_with_alt as f64 / self.image_count as f64)
        }
    }

    #[must_use]
    pub const fn images_missing_alt(&self) -> usize {
        self.image_count.saturating_sub(self.images_with_alt)
    }
}
