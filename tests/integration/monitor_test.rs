#![allow(clippy::expect_used)]

use std::time::Duration;

use sitepulse::application::services::monitor::MonitorService;
use sitepulse::application::services::page_signals::PageSignalAnalyzer;
use sitepulse::application::services::report::ReportGenerator;
use sitepulse::application::services::vitals::{DEFAULT_MEASURE_TIMEOUT, VitalsCollector};
use sitepulse::domain::ports::store::AlertStore;
use sitepulse::domain::rules::{RuleEngine, default_rules};
use sitepulse::domain::value_objects::alert_type::AlertType;
use sitepulse::domain::value_objects::thresholds::ThresholdSet;
use sitepulse::infrastructure::capture::PageCapture;
use sitepulse::infrastructure::instrumentation::recorded::RecordedTimings;
use sitepulse::infrastructure::persistence::in_memory_store::InMemoryStore;

fn load_capture(name: &str) -> PageCapture {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    PageCapture::load_from(&path).expect("Failed to load capture fixture")
}

#[tokio::test(start_paused = true)]
async fn healthy_page_produces_clean_snapshot() {
    let capture = load_capture("healthy_page.json");
    let vitals = VitalsCollector::new(&capture.timings, DEFAULT_MEASURE_TIMEOUT);
    let analyzer = PageSignalAnalyzer::default();
    let engine = RuleEngine::new(default_rules());
    let thresholds = ThresholdSet::default();
    let report = ReportGenerator::default();
    let store = InMemoryStore::new();
    let service = MonitorService::new(
        &vitals,
        &analyzer,
        &capture.document,
        &engine,
        &thresholds,
        &report,
        &store,
        &store,
    );

    let start = tokio::time::Instant::now();
    let snapshot = service.collect(None).await;

    // Every stream reported before the bound, so the measurement ended early.
    assert!(start.elapsed() < DEFAULT_MEASURE_TIMEOUT);
    assert!(snapshot.alerts.is_empty(), "got: {:?}", snapshot.alerts);

    let cwv = snapshot.core_web_vitals;
    assert!((cwv.lcp - 1850.0).abs() < f64::EPSILON, "last LCP wins");
    assert!((cwv.fid - 32.0).abs() < f64::EPSILON);
    assert!((cwv.cls - 0.02).abs() < 1e-9);
    assert!((cwv.fcp - 880.0).abs() < f64::EPSILON);
    assert!((cwv.ttfb - 210.0).abs() < f64::EPSILON);

    let seo = &snapshot.seo_metrics;
    assert_eq!(seo.h1_count, 1);
    assert_eq!(seo.images_with_alt, 2);
    assert_eq!(seo.internal_links, 2);
    assert_eq!(seo.external_links, 1);
    assert!(seo.structured_data_present);
    assert_eq!(seo.canonical_url.as_deref(), Some("https://studio.example.com/"));
    assert!(seo.keyword_density["design"] > 0.0);
    assert!(seo.keyword_density["seo"].abs() < f64::EPSILON);
}

#[tokio::test(start_paused = true)]
async fn broken_page_raises_every_violation() {
    let capture = load_capture("broken_page.json");
    let vitals = VitalsCollector::new(&capture.timings, DEFAULT_MEASURE_TIMEOUT);
    let analyzer = PageSignalAnalyzer::default();
    let engine = RuleEngine::new(default_rules());
    let thresholds = ThresholdSet::default();
    let report = ReportGenerator::default();
    let store = InMemoryStore::new();
    let service = MonitorService::new(
        &vitals,
        &analyzer,
        &capture.document,
        &engine,
        &thresholds,
        &report,
        &store,
        &store,
    );

    let snapshot = service.collect(None).await;

    let cwv = snapshot.core_web_vitals;
    assert!((cwv.lcp - 3000.0).abs() < f64::EPSILON, "load time used when render time is 0");
    assert!((cwv.fid - 150.0).abs() < f64::EPSILON);
    assert!((cwv.cls - 0.2).abs() < 1e-9, "shifts after input are ignored");
    assert!((cwv.ttfb - 500.0).abs() < f64::EPSILON);

    let rules: Vec<&str> = snapshot.alerts.iter().map(|a| a.rule.as_str()).collect();
    assert_eq!(snapshot.alerts.len(), 8, "got: {rules:?}");
    assert_eq!(snapshot.alerts[0].alert_type, AlertType::Error);
    assert!(!snapshot.seo_metrics.structured_data_present);
    assert_eq!(snapshot.seo_metrics.internal_links, 1);
    assert_eq!(snapshot.seo_metrics.external_links, 0);

    let active = service.get_active_alerts().expect("active");
    assert_eq!(active.len(), 8);
}

#[tokio::test(start_paused = true)]
async fn repeated_collects_accumulate_history_and_alerts() {
    let capture = load_capture("broken_page.json");
    let vitals = VitalsCollector::new(&capture.timings, DEFAULT_MEASURE_TIMEOUT);
    let analyzer = PageSignalAnalyzer::default();
    let engine = RuleEngine::new(default_rules());
    let thresholds = ThresholdSet::default();
    let report = ReportGenerator::default();
    let store = InMemoryStore::new();
    let service = MonitorService::new(
        &vitals,
        &analyzer,
        &capture.document,
        &engine,
        &thresholds,
        &report,
        &store,
        &store,
    );

    let first = service.collect(None).await;
    let second = service.collect(None).await;

    assert_eq!(first.seo_metrics.page_title, second.seo_metrics.page_title);
    assert_eq!(
        first.seo_metrics.meta_description,
        second.seo_metrics.meta_description
    );
    assert_eq!(first.seo_metrics.h1_count, second.seo_metrics.h1_count);
    // Layout shifts keep accumulating on the same collector.
    assert!(second.core_web_vitals.cls > first.core_web_vitals.cls);

    let history = service.get_historical_data(None).expect("history");
    assert_eq!(history.len(), 2);
    assert!(history[0].timestamp <= history[1].timestamp);
    assert_eq!(service.get_historical_data(Some(1)).expect("limit").len(), 1);

    // No deduplication: the same problems raise new alerts every cycle.
    assert_eq!(store.get_alerts().expect("alerts").len(), 16);
}

#[tokio::test(start_paused = true)]
async fn resolving_alerts_updates_active_list_and_report() {
    let capture = load_capture("broken_page.json");
    let vitals = VitalsCollector::new(&capture.timings, DEFAULT_MEASURE_TIMEOUT);
    let analyzer = PageSignalAnalyzer::default();
    let engine = RuleEngine::new(default_rules());
    let thresholds = ThresholdSet::default();
    let report = ReportGenerator::default();
    let store = InMemoryStore::new();
    let service = MonitorService::new(
        &vitals,
        &analyzer,
        &capture.document,
        &engine,
        &thresholds,
        &report,
        &store,
        &store,
    );

    let snapshot = service.collect(None).await;
    for alert in snapshot.alerts.iter().filter(|a| a.alert_type == AlertType::Error) {
        service.resolve_alert(&alert.id).expect("resolve");
        service.resolve_alert(&alert.id).expect("resolve twice");
    }
    service.resolve_alert("no-such-alert").expect("unknown id");

    let active = service.get_active_alerts().expect("active");
    assert_eq!(active.len(), 5);
    assert!(active.iter().all(|a| a.alert_type == AlertType::Warning));

    let report = service.generate_performance_report().expect("report");
    assert_eq!(report.summary.total_pages, 1);
    assert_eq!(report.summary.active_alerts, 5);
    assert!((report.summary.average_lcp - 3000.0).abs() < f64::EPSILON);
    assert!(report.summary.average_seo_score < 70.0);
    assert!(report.recommendations.iter().any(|r| r.contains("LCP")));
    assert!(report.recommendations.iter().any(|r| r.contains("CLS")));
    assert!(!report.recommendations.iter().any(|r| r.contains("TTFB")));
}

#[tokio::test(start_paused = true)]
async fn empty_history_report_is_zeroed() {
    let capture = load_capture("healthy_page.json");
    let vitals = VitalsCollector::new(&capture.timings, DEFAULT_MEASURE_TIMEOUT);
    let analyzer = PageSignalAnalyzer::default();
    let engine = RuleEngine::new(default_rules());
    let thresholds = ThresholdSet::default();
    let report = ReportGenerator::default();
    let store = InMemoryStore::new();
    let service = MonitorService::new(
        &vitals,
        &analyzer,
        &capture.document,
        &engine,
        &thresholds,
        &report,
        &store,
        &store,
    );

    let report = service.generate_performance_report().expect("report");
    let s = &report.summary;
    assert_eq!(s.total_pages, 0);
    assert_eq!(s.active_alerts, 0);
    for value in [
        s.average_lcp,
        s.average_fid,
        s.average_cls,
        s.average_performance_score,
        s.average_seo_score,
    ] {
        assert!(!value.is_nan());
    }
    assert!(report.recommendations.is_empty());

    let json = serde_json::to_value(&report).expect("serialize");
    assert_eq!(json["summary"]["totalPages"], 0);
}

#[tokio::test(start_paused = true)]
async fn unsupported_runtime_reports_zero_vitals() {
    let capture = load_capture("healthy_page.json");
    let timings = RecordedTimings::unsupported();
    let vitals = VitalsCollector::new(&timings, DEFAULT_MEASURE_TIMEOUT);
    let analyzer = PageSignalAnalyzer::default();
    let engine = RuleEngine::new(default_rules());
    let thresholds = ThresholdSet::default();
    let report = ReportGenerator::default();
    let store = InMemoryStore::new();
    let service = MonitorService::new(
        &vitals,
        &analyzer,
        &capture.document,
        &engine,
        &thresholds,
        &report,
        &store,
        &store,
    );

    let start = tokio::time::Instant::now();
    let snapshot = service.collect(Some("https://studio.example.com/about")).await;

    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(snapshot.url, "https://studio.example.com/about");
    let cwv = snapshot.core_web_vitals;
    for value in [cwv.lcp, cwv.fid, cwv.cls, cwv.fcp, cwv.ttfb] {
        assert!(value.abs() < f64::EPSILON);
    }
    assert!(snapshot.alerts.is_empty());
}

#[tokio::test(start_paused = true)]
async fn concurrent_collects_keep_history_ordered() {
    let capture = load_capture("healthy_page.json");
    let vitals = VitalsCollector::new(&capture.timings, DEFAULT_MEASURE_TIMEOUT);
    let analyzer = PageSignalAnalyzer::default();
    let engine = RuleEngine::new(default_rules());
    let thresholds = ThresholdSet::default();
    let report = ReportGenerator::default();
    let store = InMemoryStore::new();
    let service = MonitorService::new(
        &vitals,
        &analyzer,
        &capture.document,
        &engine,
        &thresholds,
        &report,
        &store,
        &store,
    );

    let (a, b) = tokio::join!(service.collect(None), service.collect(None));
    assert_eq!(a.seo_metrics, b.seo_metrics);

    let history = service.get_historical_data(None).expect("history");
    assert_eq!(history.len(), 2);
    assert!(history.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

#[tokio::test(start_paused = true)]
async fn empty_trace_closes_every_stream_before_the_bound() {
    let capture = load_capture("healthy_page.json");
    let timings = RecordedTimings {
        entries: vec![],
        ..RecordedTimings::default()
    };
    let vitals = VitalsCollector::new(&timings, Duration::from_millis(300));
    let analyzer = PageSignalAnalyzer::default();
    let engine = RuleEngine::new(default_rules());
    let thresholds = ThresholdSet::default();
    let report = ReportGenerator::default();
    let store = InMemoryStore::new();
    let service = MonitorService::new(
        &vitals,
        &analyzer,
        &capture.document,
        &engine,
        &thresholds,
        &report,
        &store,
        &store,
    );

    let start = tokio::time::Instant::now();
    let snapshot = service.collect(None).await;
    assert!(start.elapsed() < Duration::from_millis(300));
    assert!(snapshot.core_web_vitals.lcp.abs() < f64::EPSILON);
}
