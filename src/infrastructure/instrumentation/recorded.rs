use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::domain::ports::instrumentation::{
    EntryKind, NavigationTiming, PerformanceEntry, PerformanceSource,
};

/// An entry together with the delay after subscription at which it is
/// delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedEntry {
    #[serde(default)]
    pub delay_ms: u64,
    #[serde(flatten)]
    pub entry: PerformanceEntry,
}

/// Replays a recorded timing trace through the instrumentation port.
///
/// Every subscription gets its own copy of the matching entries. Entries
/// with no delay are buffered before the receiver is handed out; delayed
/// ones are sent from a background task, and the stream closes after the
/// last one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordedTimings {
    pub supported: bool,
    /// Kinds that cannot be observed at all.
    pub unobservable: Vec<EntryKind>,
    pub entries: Vec<RecordedEntry>,
    pub navigation: Option<NavigationTiming>,
}

impl Default for RecordedTimings {
    fn default() -> Self {
        Self {
            supported: true,
            unobservable: Vec::new(),
            entries: Vec::new(),
            navigation: None,
        }
    }
}

impl RecordedTimings {
    /// A runtime without any performance instrumentation.
    #[must_use]
    pub const fn unsupported() -> Self {
        Self {
            supported: false,
            unobservable: Vec::new(),
            entries: Vec::new(),
            navigation: None,
        }
    }
}

impl PerformanceSource for RecordedTimings {
    fn supports_observers(&self) -> bool {
        self.supported
    }

    fn observe(&self, kind: EntryKind) -> Option<UnboundedReceiver<PerformanceEntry>> {
        if !self.supported || self.unobservable.contains(&kind) {
            return None;
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let mut delayed: Vec<RecordedEntry> = Vec::new();
        for recorded in self.entries.iter().filter(|r| r.entry.kind() == kind) {
            if recorded.delay_ms == 0 {
                tx.send(recorded.entry.clone()).ok();
            } else {
                delayed.push(recorded.clone());
            }
        }

        if !delayed.is_empty() {
            delayed.sort_by_key(|r| r.delay_ms);
            tokio::spawn(async move {
                let start = tokio::time::Instant::now();
                for recorded in delayed {
                    tokio::time::sleep_until(start + Duration::from_millis(recorded.delay_ms))
                        .await;
                    if tx.send(recorded.entry).is_err() {
                        tracing::debug!("{kind:?} subscriber gone, stopping replay");
                        break;
                    }
                }
            });
        }

        Some(rx)
    }

    fn navigation_timing(&self) -> Option<NavigationTiming> {
        if self.supported { self.navigation } else { None }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn paint(start_time: f64) -> PerformanceEntry {
        PerformanceEntry::Paint {
            name: "first-contentful-paint".into(),
            start_time,
        }
    }

    #[test]
    fn unsupported_runtime_observes_nothing() {
        let timings = RecordedTimings::unsupported();
        assert!(!timings.supports_observers());
        assert!(timings.observe(EntryKind::Paint).is_none());
        assert!(timings.navigation_timing().is_none());
    }

    #[test]
    fn unobservable_kinds_return_none() {
        let timings = RecordedTimings {
            unobservable: vec![EntryKind::FirstInput],
            ..RecordedTimings::default()
        };
        assert!(timings.observe(EntryKind::FirstInput).is_none());
        assert!(timings.observe(EntryKind::LayoutShift).is_some());
    }

    #[test]
    fn immediate_entries_are_buffered_and_stream_closes() {
        let timings = RecordedTimings {
            entries: vec![
                RecordedEntry {
                    delay_ms: 0,
                    entry: paint(640.0),
                },
                RecordedEntry {
                    delay_ms: 0,
                    entry: PerformanceEntry::LayoutShift {
                        value: 0.01,
                        had_recent_input: false,
                    },
                },
            ],
            ..RecordedTimings::default()
        };
        let mut rx = timings.observe(EntryKind::Paint).expect("observable");
        assert_eq!(rx.try_recv().expect("buffered"), paint(640.0));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_entries_arrive_in_delay_order() {
        let timings = RecordedTimings {
            entries: vec![
                RecordedEntry {
                    delay_ms: 300,
                    entry: paint(2.0),
                },
                RecordedEntry {
                    delay_ms: 100,
                    entry: paint(1.0),
                },
            ],
            ..RecordedTimings::default()
        };
        let mut rx = timings.observe(EntryKind::Paint).expect("observable");
        let start = tokio::time::Instant::now();

        assert_eq!(rx.recv().await, Some(paint(1.0)));
        assert!(start.elapsed() >= Duration::from_millis(100));
        assert_eq!(rx.recv().await, Some(paint(2.0)));
        assert!(start.elapsed() >= Duration::from_millis(300));
        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn parses_flattened_entries() {
        let json = r#"{
            "entries": [
                {"delayMs": 50, "entryType": "largest-contentful-paint", "renderTime": 1800.0, "loadTime": 0.0},
                {"entryType": "layout-shift", "value": 0.02, "hadRecentInput": false}
            ],
            "navigation": {"requestStart": 10.0, "responseStart": 210.0}
        }"#;
        let timings: RecordedTimings = serde_json::from_str(json).expect("parse");
        assert!(timings.supported);
        assert_eq!(timings.entries[0].delay_ms, 50);
        assert_eq!(timings.entries[1].delay_ms, 0);
        assert_eq!(timings.entries[1].entry.kind(), EntryKind::LayoutShift);
        assert!(timings.navigation_timing().is_some());
    }
}
