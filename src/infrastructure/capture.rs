use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::document::static_document::StaticDocument;
use super::instrumentation::recorded::RecordedTimings;

/// A captured page view: the document facts plus the timing trace recorded
/// while it loaded. This is the unit the CLI monitors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCapture {
    pub document: StaticDocument,
    #[serde(default)]
    pub timings: RecordedTimings,
}

impl PageCapture {
    /// Load a capture from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid capture.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read capture file {}", path.display()))?;
        let capture: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse capture file {}", path.display()))?;
        tracing::debug!(
            "Loaded capture for {} ({} timing entries)",
            capture.document.url,
            capture.timings.entries.len()
        );
        Ok(capture)
    }
}
