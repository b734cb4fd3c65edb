use crate::domain::entities::alert::Alert;
use crate::domain::entities::snapshot::MonitoringSnapshot;
use crate::domain::value_objects::alert_type::AlertType;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

/// Minimum share of images that must carry alt text.
const MIN_ALT_COVERAGE: f64 = 0.9;

pub struct ImageAltRule;

impl Rule for ImageAltRule {
    fn name(&self) -> &'static str {
        "images_missing_alt"
    }

    fn evaluate(&self, snapshot: &MonitoringSnapshot, _: &ThresholdSet) -> Vec<Alert> {
        let metrics = &snapshot.seo_metrics;
        match metrics.alt_coverage() {
            Some(coverage) if coverage < MIN_ALT_COVERAGE => vec![Alert::new(
                self.name(),
                AlertType::Warning,
                format!(
                    "{} of {} images missing alt text",
                    metrics.images_missing_alt(),
                    metrics.image_count
                ),
                &snapshot.url,
            )],
            _ => vec![],
        }
    }
}
