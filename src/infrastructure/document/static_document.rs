use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ports::document::{ImageElement, PageDocument};

/// A pre-extracted page: the DOM facts the analyzer queries, captured once
/// and replayed as often as needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaticDocument {
    pub url: String,
    pub title: Option<String>,
    /// `<meta name>` → `content`. Names are matched case-insensitively.
    pub meta: BTreeMap<String, String>,
    /// `<link rel>` → `href`.
    pub links: BTreeMap<String, String>,
    /// Heading tag (`h1`..`h6`) → element count.
    pub headings: BTreeMap<String, usize>,
    pub images: Vec<ImageElement>,
    pub anchors: Vec<String>,
    pub text: String,
    pub structured_data: Vec<String>,
}

fn lookup(map: &BTreeMap<String, String>, key: &str) -> Option<String> {
    map.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.clone())
}

impl PageDocument for StaticDocument {
    fn url(&self) -> String {
        self.url.clone()
    }

    fn title(&self) -> Option<String> {
        self.title.clone()
    }

    fn meta_content(&self, name: &str) -> Option<String> {
        lookup(&self.meta, name)
    }

    fn link_href(&self, rel: &str) -> Option<String> {
        lookup(&self.links, rel)
    }

    fn heading_count(&self, level: u8) -> usize {
        let tag = format!("h{level}");
        self.headings
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(&tag))
            .map_or(0, |(_, count)| *count)
    }

    fn images(&self) -> Vec<ImageElement> {
        self.images.clone()
    }

    fn anchor_hrefs(&self) -> Vec<String> {
        self.anchors.clone()
    }

    fn visible_text(&self) -> String {
        self.text.clone()
    }

    fn structured_data_blocks(&self) -> Vec<String> {
        self.structured_data.clone()
    }
}
