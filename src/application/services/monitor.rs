use chrono::Utc;

use super::page_signals::PageSignalAnalyzer;
use super::report::ReportGenerator;
use super::vitals::VitalsCollector;
use crate::domain::entities::alert::Alert;
use crate::domain::entities::report::PerformanceReport;
use crate::domain::entities::snapshot::MonitoringSnapshot;
use crate::domain::ports::document::PageDocument;
use crate::domain::ports::store::{AlertStore, SnapshotStore, StoreError};
use crate::domain::rules::RuleEngine;
use crate::domain::value_objects::thresholds::ThresholdSet;

/// Orchestrates a monitoring cycle: measure → analyze → evaluate → persist.
///
/// The only entry point that writes state is [`collect`](Self::collect);
/// every other operation is a read over already-collected data. Each
/// service works against the stores it was built with, so independent
/// monitors never share history or alerts.
pub struct MonitorService<'a> {
    vitals: &'a VitalsCollector<'a>,
    analyzer: &'a PageSignalAnalyzer,
    document: &'a dyn PageDocument,
    rule_engine: &'a RuleEngine,
    thresholds: &'a ThresholdSet,
    report: &'a ReportGenerator,
    alert_store: &'a dyn AlertStore,
    snapshot_store: &'a dyn SnapshotStore,
}

impl<'a> MonitorService<'a> {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        vitals: &'a VitalsCollector<'a>,
        analyzer: &'a PageSignalAnalyzer,
        document: &'a dyn PageDocument,
        rule_engine: &'a RuleEngine,
        thresholds: &'a ThresholdSet,
        report: &'a ReportGenerator,
        alert_store: &'a dyn AlertStore,
        snapshot_store: &'a dyn SnapshotStore,
    ) -> Self {
        Self {
            vitals,
            analyzer,
            document,
            rule_engine,
            thresholds,
            report,
            alert_store,
            snapshot_store,
        }
    }

    /// Run one cycle for `url` (the document's own URL when `None`) and
    /// return the resulting snapshot. Storage failures are logged, never
    /// propagated: the caller always gets the snapshot.
    pub async fn collect(&self, url: Option<&str>) -> MonitoringSnapshot {
        let url = url.map_or_else(|| self.document.url(), str::to_string);
        tracing::debug!("Collecting snapshot for {url}");

        let core_web_vitals = self.vitals.measure().await;
        let seo_metrics = self.analyzer.analyze(self.document);

        let mut snapshot = MonitoringSnapshot {
            url,
            timestamp: Utc::now(),
            core_web_vitals,
            seo_metrics,
            alerts: Vec::new(),
        };

        let alerts = self.rule_engine.analyze(&snapshot, self.thresholds);
        if alerts.is_empty() {
            tracing::debug!("Page OK, no alerts");
        } else {
            tracing::warn!("{} alert(s) raised for {}", alerts.len(), snapshot.url);
        }

        if let Err(e) = self.alert_store.save_alerts(&alerts) {
            tracing::warn!("Failed to save alerts: {e}");
        }
        snapshot.alerts = alerts;

        if let Err(e) = self.snapshot_store.save_snapshot(&snapshot) {
            tracing::warn!("Failed to save snapshot: {e}");
        }

        snapshot
    }

    /// Snapshot history, oldest first; the last `limit` entries when given.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the history cannot be read.
    pub fn get_historical_data(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<MonitoringSnapshot>, StoreError> {
        self.snapshot_store.get_recent_snapshots(limit)
    }

    /// Alerts that have not been resolved.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the registry cannot be read.
    pub fn get_active_alerts(&self) -> Result<Vec<Alert>, StoreError> {
        self.alert_store.get_active_alerts()
    }

    /// Mark an alert as resolved. Unknown ids are ignored; resolving twice
    /// is harmless.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the registry cannot be updated.
    pub fn resolve_alert(&self, id: &str) -> Result<(), StoreError> {
        if self.alert_store.resolve_alert(id)? {
            tracing::info!("Alert {id} resolved");
        } else {
            tracing::debug!("Resolve ignored, unknown alert id {id}");
        }
        Ok(())
    }

    /// Rolling report over the most recent snapshots.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the history or the registry cannot be read.
    pub fn generate_performance_report(&self) -> Result<PerformanceReport, StoreError> {
        let history = self
            .snapshot_store
            .get_recent_snapshots(Some(self.report.window()))?;
        let active = self.alert_store.get_active_alerts()?.len();
        Ok(self.report.generate(&history, active, self.thresholds))
    }
}
