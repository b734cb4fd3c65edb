#![allow(clippy::expect_used)]

use sitepulse::domain::entities::alert::Alert;
use sitepulse::domain::entities::snapshot::MonitoringSnapshot;
use sitepulse::domain::rules::{RuleEngine, default_rules};
use sitepulse::domain::value_objects::alert_type::AlertType;
use sitepulse::domain::value_objects::thresholds::ThresholdSet;

fn load_fixture(name: &str) -> MonitoringSnapshot {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let json = std::fs::read_to_string(&path).expect("Failed to read fixture");
    serde_json::from_str(&json).expect("Failed to parse fixture")
}

fn rules_of(alerts: &[Alert]) -> Vec<&str> {
    alerts.iter().map(|a| a.rule.as_str()).collect()
}

#[test]
fn healthy_snapshot_triggers_no_alerts() {
    let snapshot = load_fixture("snapshot_healthy.json");
    let engine = RuleEngine::new(default_rules());
    let alerts = engine.analyze(&snapshot, &ThresholdSet::default());
    assert!(
        alerts.is_empty(),
        "Expected no alerts on healthy snapshot, got: {alerts:?}"
    );
}

#[test]
fn broken_snapshot_raises_one_alert_per_violated_rule() {
    let snapshot = load_fixture("snapshot_broken.json");
    let engine = RuleEngine::new(default_rules());
    let alerts = engine.analyze(&snapshot, &ThresholdSet::default());

    let rules = rules_of(&alerts);
    assert_eq!(alerts.len(), 8, "got: {rules:?}");
    for expected in [
        "lcp_high",
        "fid_high",
        "cls_high",
        "missing_title",
        "missing_description",
        "missing_h1",
        "images_missing_alt",
        "low_seo_score",
    ] {
        assert!(rules.contains(&expected), "missing {expected} in {rules:?}");
    }
    assert!(!rules.contains(&"multiple_h1"));
}

#[test]
fn errors_are_listed_before_warnings() {
    let snapshot = load_fixture("snapshot_broken.json");
    let engine = RuleEngine::new(default_rules());
    let alerts = engine.analyze(&snapshot, &ThresholdSet::default());

    let types: Vec<AlertType> = alerts.iter().map(|a| a.alert_type).collect();
    assert!(types.windows(2).all(|w| w[0] >= w[1]), "got: {types:?}");
    assert_eq!(
        rules_of(&alerts[..3]),
        vec!["missing_title", "missing_description", "missing_h1"]
    );
}

#[test]
fn vitals_over_default_thresholds_raise_exactly_three_vitals_alerts() {
    let mut snapshot = load_fixture("snapshot_healthy.json");
    snapshot.core_web_vitals = load_fixture("snapshot_broken.json").core_web_vitals;

    let engine = RuleEngine::new(default_rules());
    let alerts = engine.analyze(&snapshot, &ThresholdSet::default());

    assert_eq!(alerts.len(), 3);
    assert!(alerts.iter().all(|a| a.alert_type == AlertType::Warning));
    assert!(alerts[0].message.contains("LCP"));
    assert!(alerts[1].message.contains("FID"));
    assert!(alerts[2].message.contains("CLS"));
}

#[test]
fn title_h1_and_alt_violations_on_clean_snapshot() {
    let mut snapshot = load_fixture("snapshot_healthy.json");
    snapshot.seo_metrics.page_title = String::new();
    snapshot.seo_metrics.h1_count = 0;
    snapshot.seo_metrics.image_count = 3;
    snapshot.seo_metrics.images_with_alt = 1;

    let engine = RuleEngine::new(default_rules());
    let alerts = engine.analyze(&snapshot, &ThresholdSet::default());
    let rules = rules_of(&alerts);

    assert!(alerts.len() >= 3);
    assert!(rules.contains(&"missing_title"));
    assert!(rules.contains(&"missing_h1"));
    let alt = alerts
        .iter()
        .find(|a| a.rule == "images_missing_alt")
        .expect("alt alert");
    assert_eq!(alt.alert_type, AlertType::Warning);
    assert!(alt.message.contains("2 of 3"));
}

#[test]
fn three_h1_headings_warn_without_missing_h1_error() {
    let mut snapshot = load_fixture("snapshot_healthy.json");
    snapshot.seo_metrics.h1_count = 3;

    let engine = RuleEngine::new(default_rules());
    let alerts = engine.analyze(&snapshot, &ThresholdSet::default());
    let rules = rules_of(&alerts);

    assert!(rules.contains(&"multiple_h1"));
    assert!(!rules.contains(&"missing_h1"));
}

#[test]
fn disabling_seo_threshold_silences_score_rule() {
    let snapshot = load_fixture("snapshot_broken.json");
    let thresholds = ThresholdSet {
        seo_score: None,
        ..ThresholdSet::default()
    };
    let engine = RuleEngine::new(default_rules());
    let alerts = engine.analyze(&snapshot, &thresholds);
    assert!(!rules_of(&alerts).contains(&"low_seo_score"));
    assert_eq!(alerts.len(), 7);
}

#[test]
fn alerts_carry_page_and_unique_ids() {
    let snapshot = load_fixture("snapshot_broken.json");
    let engine = RuleEngine::new(default_rules());
    let mut alerts = engine.analyze(&snapshot, &ThresholdSet::default());
    alerts.extend(engine.analyze(&snapshot, &ThresholdSet::default()));

    assert!(alerts.iter().all(|a| a.page == snapshot.url));
    assert!(alerts.iter().all(|a| !a.resolved));
    let mut ids: Vec<&str> = alerts.iter().map(|a| a.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), alerts.len());
}
