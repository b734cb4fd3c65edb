use serde::{Deserialize, Serialize};

/// An `<img>` element as seen by the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageElement {
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Read-only view of a rendered document, limited to the queries the
/// page signal analyzer needs. Implementations must never fail: absent
/// elements are reported as `None`, zero or empty collections.
pub trait PageDocument: Send + Sync {
    /// Absolute URL of the current page.
    fn url(&self) -> String;

    fn title(&self) -> Option<String>;

    /// Content of `<meta name="{name}">`.
    fn meta_content(&self, name: &str) -> Option<String>;

    /// Target of `<link rel="{rel}">`.
    fn link_href(&self, rel: &str) -> Option<String>;

    /// Number of `<h{level}>` elements.
    fn heading_count(&self, level: u8) -> usize;

    fn images(&self) -> Vec<ImageElement>;

    /// `href` of every `<a>` element, in document order.
    fn anchor_hrefs(&self) -> Vec<String>;

    /// Visible text content of the body.
    fn visible_text(&self) -> String;

    /// Raw bodies of embedded structured-data scripts.
    fn structured_data_blocks(&self) -> Vec<String>;
}
