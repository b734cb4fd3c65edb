use crate::domain::entities::alert::Alert;
use crate::domain::entities::snapshot::MonitoringSnapshot;
use crate::domain::value_objects::alert_type::AlertType;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

pub struct LcpRule;

impl Rule for LcpRule {
    fn name(&self) -> &'static str {
        "lcp_high"
    }

    fn evaluate(&self, snapshot: &MonitoringSnapshot, thresholds: &ThresholdSet) -> Vec<Alert> {
        let lcp = snapshot.core_web_vitals.lcp;
        if lcp > thresholds.lcp_ms {
            vec![Alert::new(
                self.name(),
                AlertType::Warning,
                format!(
                    "LCP too high: {lcp:.0}ms (threshold {:.0}ms)",
                    thresholds.lcp_ms
                ),
                &snapshot.url,
            )]
        } else {
            vec![]
        }
    }
}

pub struct FidRule;

impl Rule for FidRule {
    fn name(&self) -> &'static str {
        "fid_high"
    }

    fn evaluate(&self, snapshot: &MonitoringSnapshot, thresholds: &ThresholdSet) -> Vec<Alert> {
        let fid = snapshot.core_web_vitals.fid;
        if fid > thresholds.fid_ms {
            vec![Alert::new(
                self.name(),
                AlertType::Warning,
                format!(
                    "FID too high: {fid:.0}ms (threshold {:.0}ms)",
                    thresholds.fid_ms
                ),
                &snapshot.url,
            )]
        } else {
            vec![]
        }
    }
}

pub struct ClsRule;

impl Rule for ClsRule {
    fn name(&self) -> &'static str {
        "cls_high"
    }

    fn evaluate(&self, snapshot: &MonitoringSnapshot, thresholds: &ThresholdSet) -> Vec<Alert> {
        let cls = snapshot.core_web_vitals.cls;
        if cls > thresholds.cls {
            vec![Alert::new(
                self.name(),
                AlertType::Warning,
                format!("CLS too high: {cls:.3} (threshold {:.3})", thresholds.cls),
                &snapshot.url,
            )]
        } else {
            vec![]
        }
    }
}
