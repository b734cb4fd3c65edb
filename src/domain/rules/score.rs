use crate::domain::entities::alert::Alert;
use crate::domain::entities::snapshot::MonitoringSnapshot;
use crate::domain::value_objects::alert_type::AlertType;
use crate::domain::value_objects::score::seo_score;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

/// Fires when the SEO score threshold is configured and the page falls below it.
pub struct SeoScoreRule;

impl Rule for SeoScoreRule {
    fn name(&self) -> &'static str {
        "low_seo_score"
    }

    fn evaluate(&self, snapshot: &MonitoringSnapshot, thresholds: &ThresholdSet) -> Vec<Alert> {
        let Some(minimum) = thresholds.seo_score else {
            return vec![];
        };
        let score = seo_score(&snapshot.seo_metrics);
        if score < minimum {
            vec![Alert::new(
                self.name(),
                AlertType::Warning,
                format!("Low SEO score: {score:.0} (threshold {minimum:.0})"),
                &snapshot.url,
            )]
        } else {
            vec![]
        }
    }
}
