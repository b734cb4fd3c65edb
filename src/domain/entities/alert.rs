use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::alert_type::AlertType;

static ALERT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// A problem detected on a page during one evaluation cycle.
///
/// Alerts are never deleted; the only mutation after creation is
/// flipping `resolved` to `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// Tag of the rule that raised the alert (e.g. `lcp_high`).
    pub rule: String,
    pub message: String,
    pub page: String,
    pub timestamp: DateTime<Utc>,
    pub resolved: bool,
}

impl Alert {
    /// Create an unresolved alert stamped with the current time.
    #[must_use]
    pub fn new(rule: &str, alert_type: AlertType, message: String, page: &str) -> Self {
        let timestamp = Utc::now();
        Self {
            id: next_alert_id(rule, timestamp),
            alert_type,
            rule: rule.to_string(),
            message,
            page: page.to_string(),
            timestamp,
            resolved: false,
        }
    }
}

/// `{rule}-{unix_millis}-{sequence}`; the sequence keeps ids unique when two
/// alerts share a rule and a millisecond.
fn next_alert_id(rule: &str, timestamp: DateTime<Utc>) -> String {
    let seq = ALERT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{rule}-{}-{seq}", timestamp.timestamp_millis())
}
