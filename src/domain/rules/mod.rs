pub mod content;
pub mod images;
pub mod score;
pub mod vitals;

use crate::domain::entities::alert::Alert;
use crate::domain::entities::snapshot::MonitoringSnapshot;
use crate::domain::value_objects::thresholds::ThresholdSet;

/// A deterministic check that evaluates a page snapshot and produces alerts.
/// Rules are pure functions: snapshot + thresholds in, alerts out. No I/O.
pub trait Rule: Send + Sync {
    /// Returns the unique tag of this rule
    fn name(&self) -> &'static str;

    /// Evaluates the rule against a snapshot using the given thresholds
    fn evaluate(&self, snapshot: &MonitoringSnapshot, thresholds: &ThresholdSet) -> Vec<Alert>;
}

/// Returns every page rule: vitals, content, images and SEO score.
#[must_use]
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(vitals::LcpRule),
        Box::new(vitals::FidRule),
        Box::new(vitals::ClsRule),
        Box::new(content::MissingTitleRule),
        Box::new(content::MissingDescriptionRule),
        Box::new(content::MissingH1Rule),
        Box::new(content::MultipleH1Rule),
        Box::new(images::ImageAltRule),
        Box::new(score::SeoScoreRule),
    ]
}

/// Threshold evaluator: runs every rule independently against a snapshot.
/// No suppression happens across rules or across snapshots.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Evaluates all rules, returning alerts ordered errors first. The sort is
    /// stable, so alerts of the same type keep rule registration order.
    #[must_use]
    pub fn analyze(&self, snapshot: &MonitoringSnapshot, thresholds: &ThresholdSet) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = self
            .rules
            .iter()
            .flat_map(|rule| rule.evaluate(snapshot, thresholds))
            .collect();
        alerts.sort_by(|a, b| b.alert_type.cmp(&a.alert_type));
        alerts
    }
}
