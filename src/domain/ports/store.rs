use thiserror::Error;

use crate::domain::entities::alert::Alert;
use crate::domain::entities::snapshot::MonitoringSnapshot;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage read failed: {0}")]
    ReadFailed(String),
    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

pub trait AlertStore: Send + Sync {
    /// Append alerts to the registry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write operation fails.
    fn save_alerts(&self, alerts: &[Alert]) -> Result<(), StoreError>;

    /// Retrieve every alert ever raised, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn get_alerts(&self) -> Result<Vec<Alert>, StoreError>;

    /// Retrieve alerts that have not been resolved, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn get_active_alerts(&self) -> Result<Vec<Alert>, StoreError>;

    /// Mark an alert as resolved. Returns whether an alert with this id
    /// exists; an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write operation fails.
    fn resolve_alert(&self, id: &str) -> Result<bool, StoreError>;
}

pub trait SnapshotStore: Send + Sync {
    /// Append a snapshot to the history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write operation fails.
    fn save_snapshot(&self, snapshot: &MonitoringSnapshot) -> Result<(), StoreError>;

    /// Retrieve the last `limit` snapshots (all when `None`), oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn get_recent_snapshots(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<MonitoringSnapshot>, StoreError>;

    /// Number of snapshots in the history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn snapshot_count(&self) -> Result<usize, StoreError>;
}
