use std::sync::Mutex;

use crate::domain::entities::alert::Alert;
use crate::domain::entities::snapshot::MonitoringSnapshot;
use crate::domain::ports::store::{AlertStore, SnapshotStore, StoreError};

/// Process-memory alert registry and snapshot history. Nothing survives a
/// restart; each instance owns its own state.
pub struct InMemoryStore {
    alerts: Mutex<Vec<Alert>>,
    snapshots: Mutex<Vec<MonitoringSnapshot>>,
}

impl InMemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            alerts: Mutex::new(Vec::new()),
            snapshots: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertStore for InMemoryStore {
    fn save_alerts(&self, alerts: &[Alert]) -> Result<(), StoreError> {
        self.alerts
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?
            .extend_from_slice(alerts);
        Ok(())
    }

    fn get_alerts(&self) -> Result<Vec<Alert>, StoreError> {
        Ok(self
            .alerts
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .clone())
    }

    fn get_active_alerts(&self) -> Result<Vec<Alert>, StoreError> {
        Ok(self
            .alerts
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .iter()
            .filter(|a| !a.resolved)
            .cloned()
            .collect())
    }

    fn resolve_alert(&self, id: &str) -> Result<bool, StoreError> {
        let mut alerts = self
            .alerts
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;
        let found = alerts.iter_mut().find(|a| a.id == id).map(|alert| {
            alert.resolved = true;
        });
        drop(alerts);
        Ok(found.is_some())
    }
}

impl SnapshotStore for InMemoryStore {
    fn save_snapshot(&self, snapshot: &MonitoringSnapshot) -> Result<(), StoreError> {
        let mut snapshots = self
            .snapshots
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;
        // Concurrent collects may finish out of order; keep the history sorted.
        let position = snapshots.partition_point(|s| s.timestamp <= snapshot.timestamp);
        snapshots.insert(position, snapshot.clone());
        drop(snapshots);
        Ok(())
    }

    fn get_recent_snapshots(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<MonitoringSnapshot>, StoreError> {
        let snapshots = self
            .snapshots
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?;
        let skip = limit.map_or(0, |n| snapshots.len().saturating_sub(n));
        Ok(snapshots[skip..].to_vec())
    }

    fn snapshot_count(&self) -> Result<usize, StoreError> {
        Ok(self
            .snapshots
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .len())
    }
}
