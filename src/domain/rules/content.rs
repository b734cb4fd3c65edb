use crate::domain::entities::alert::Alert;
use crate::domain::entities::snapshot::MonitoringSnapshot;
use crate::domain::value_objects::alert_type::AlertType;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

pub struct MissingTitleRule;

impl Rule for MissingTitleRule {
    fn name(&self) -> &'static str {
        "missing_title"
    }

    fn evaluate(&self, snapshot: &MonitoringSnapshot, _: &ThresholdSet) -> Vec<Alert> {
        if snapshot.seo_metrics.page_title.trim().is_empty() {
            vec![Alert::new(
                self.name(),
                AlertType::Error,
                "Missing page title".to_string(),
                &snapshot.url,
            )]
        } else {
            vec![]
        }
    }
}

pub struct MissingDescriptionRule;

impl Rule for MissingDescriptionRule {
    fn name(&self) -> &'static str {
        "missing_description"
    }

    fn evaluate(&self, snapshot: &MonitoringSnapshot, _: &ThresholdSet) -> Vec<Alert> {
        if snapshot.seo_metrics.meta_description.trim().is_empty() {
            vec![Alert::new(
                self.name(),
                AlertType::Error,
                "Missing meta description".to_string(),
                &snapshot.url,
            )]
        } else {
            vec![]
        }
    }
}

pub struct MissingH1Rule;

impl Rule for MissingH1Rule {
    fn name(&self) -> &'static str {
        "missing_h1"
    }

    fn evaluate(&self, snapshot: &MonitoringSnapshot, _: &ThresholdSet) -> Vec<Alert> {
        if snapshot.seo_metrics.h1_count == 0 {
            vec![Alert::new(
                self.name(),
                AlertType::Error,
                "No H1 heading found".to_string(),
                &snapshot.url,
            )]
        } else {
            vec![]
        }
    }
}

pub struct MultipleH1Rule;

impl Rule for MultipleH1Rule {
    fn name(&self) -> &'static str {
        "multiple_h1"
    }

    fn evaluate(&self, snapshot: &MonitoringSnapshot, _: &ThresholdSet) -> Vec<Alert> {
        let count = snapshot.seo_metrics.h1_count;
        if count > 1 {
            vec![Alert::new(
                self.name(),
                AlertType::Warning,
                format!("Multiple H1 headings found ({count})"),
                &snapshot.url,
            )]
        } else {
            vec![]
        }
    }
}
