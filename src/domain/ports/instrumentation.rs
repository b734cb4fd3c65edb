use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedReceiver;

/// Kinds of asynchronously delivered timing entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    LargestContentfulPaint,
    FirstInput,
    LayoutShift,
    Paint,
}

impl EntryKind {
    pub const ALL: [Self; 4] = [
        Self::LargestContentfulPaint,
        Self::FirstInput,
        Self::LayoutShift,
        Self::Paint,
    ];
}

/// A single timing entry as delivered by the browser. Times are in
/// milliseconds relative to navigation start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entryType", rename_all = "kebab-case")]
pub enum PerformanceEntry {
    #[serde(rename_all = "camelCase")]
    LargestContentfulPaint { render_time: f64, load_time: f64 },
    #[serde(rename_all = "camelCase")]
    FirstInput {
        start_time: f64,
        processing_start: f64,
    },
    #[serde(rename_all = "camelCase")]
    LayoutShift { value: f64, had_recent_input: bool },
    #[serde(rename_all = "camelCase")]
    Paint { name: String, start_time: f64 },
}

impl PerformanceEntry {
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        match self {
            Self::LargestContentfulPaint { .. } => EntryKind::LargestContentfulPaint,
            Self::FirstInput { .. } => EntryKind::FirstInput,
            Self::LayoutShift { .. } => EntryKind::LayoutShift,
            Self::Paint { .. } => EntryKind::Paint,
        }
    }
}

/// The navigation timing entry, read synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationTiming {
    pub request_start: f64,
    pub response_start: f64,
}

/// Browser-provided performance instrumentation.
pub trait PerformanceSource: Send + Sync {
    /// Whether the runtime exposes entry observers at all.
    fn supports_observers(&self) -> bool;

    /// Subscribe to entries of one kind. `None` when that kind cannot be
    /// observed. The stream ends when the sender side is dropped.
    fn observe(&self, kind: EntryKind) -> Option<UnboundedReceiver<PerformanceEntry>>;

    /// The single navigation entry, if the runtime has one.
    fn navigation_timing(&self) -> Option<NavigationTiming>;
}
