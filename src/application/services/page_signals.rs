use std::collections::BTreeMap;

use crate::domain::entities::seo::SeoMetrics;
use crate::domain::ports::document::PageDocument;

/// Default tracked vocabulary for keyword density.
pub const DEFAULT_KEYWORDS: [&str; 8] = [
    "web",
    "design",
    "development",
    "seo",
    "marketing",
    "digital",
    "agency",
    "performance",
];

/// Extracts on-page SEO signals from a document. Never fails: missing
/// elements yield empty strings, zero counts or `None`.
pub struct PageSignalAnalyzer {
    keywords: Vec<String>,
}

impl PageSignalAnalyzer {
    #[must_use]
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn analyze(&self, document: &dyn PageDocument) -> SeoMetrics {
        let images = document.images();
        let images_with_alt = images
            .iter()
            .filter(|img| img.alt.as_deref().is_some_and(|alt| !alt.trim().is_empty()))
            .count();

        let page_host = host_of(&document.url());
        let hrefs = document.anchor_hrefs();
        let internal_links = hrefs.iter().filter(|href| is_internal_link(href)).count();
        let external_links = hrefs
            .iter()
            .filter(|href| is_external_link(href, page_host.as_deref()))
            .count();

        let text = document.visible_text();
        let words: Vec<&str> = text.split_whitespace().collect();

        let structured_data_present = document
            .structured_data_blocks()
            .iter()
            .any(|block| serde_json::from_str::<serde_json::Value>(block).is_ok());

        let metrics = SeoMetrics {
            page_title: document.title().unwrap_or_default(),
            meta_description: document.meta_content("description").unwrap_or_default(),
            h1_count: document.heading_count(1),
            h2_count: document.heading_count(2),
            image_count: images.len(),
            images_with_alt,
            internal_links,
            external_links,
            word_count: words.len(),
            keyword_density: self.keyword_density(&words),
            structured_data_present,
            canonical_url: document.link_href("canonical"),
            meta_robots: document.meta_content("robots"),
        };

        tracing::debug!(
            "Page signals: {} words, {} images ({} with alt), {} internal / {} external links",
            metrics.word_count,
            metrics.image_count,
            metrics.images_with_alt,
            metrics.internal_links,
            metrics.external_links
        );

        metrics
    }

    /// Percentage of words containing each keyword as a case-insensitive
    /// substring, so inflected forms ("designs", "designer") count too.
    #[allow(clippy::cast_precision_loss)]
    fn keyword_density(&self, words: &[&str]) -> BTreeMap<String, f64> {
        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        self.keywords
            .iter()
            .map(|keyword| {
                let density = if lowered.is_empty() {
                    0.0
                } else {
                    let hits = lowered.iter().filter(|w| w.contains(keyword.as_str())).count();
                    hits as f64 / lowered.len() as f64 * 100.0
                };
                (keyword.clone(), density)
            })
            .collect()
    }
}

impl Default for PageSignalAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().map(|k| (*k).to_string()).collect())
    }
}

fn is_internal_link(href: &str) -> bool {
    (href.starts_with('/') && !href.starts_with("//"))
        || href.starts_with("./")
        || href.starts_with("../")
}

fn is_external_link(href: &str, page_host: Option<&str>) -> bool {
    match host_of(href) {
        Some(host) => page_host != Some(host.as_str()),
        None => false,
    }
}

/// Lowercased host of an absolute `http(s)` URL, without credentials or port.
fn host_of(url: &str) -> Option<String> {
    let lower = url.trim().to_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))?;
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    let host = host_port.split(':').next().unwrap_or_default();
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
