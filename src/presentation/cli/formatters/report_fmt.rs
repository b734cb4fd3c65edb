use colored::Colorize;

use crate::domain::entities::report::PerformanceReport;
use crate::domain::entities::seo::SeoMetrics;
use crate::domain::entities::vitals::CoreWebVitals;
use crate::domain::value_objects::score::{performance_score, seo_score};
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::presentation::cli::formatters::alert_fmt::sanitize_terminal;
use crate::presentation::cli::formatters::status_fmt::{
    colorize_metric, colorize_score, print_section_header, score_bar,
};
use crate::presentation::cli::formatters::table_fmt::format_keyword_table;

const BAR_WIDTH: usize = 20;

pub fn print_vitals(vitals: &CoreWebVitals, thresholds: &ThresholdSet) {
    print_section_header("⚡ Core Web Vitals");
    println!("  LCP   {}", colorize_metric(vitals.lcp, thresholds.lcp_ms, 0, "ms"));
    println!("  FID   {}", colorize_metric(vitals.fid, thresholds.fid_ms, 0, "ms"));
    println!("  CLS   {}", colorize_metric(vitals.cls, thresholds.cls, 3, ""));
    println!("  FCP   {}", colorize_metric(vitals.fcp, thresholds.fcp_ms, 0, "ms"));
    println!("  TTFB  {}", colorize_metric(vitals.ttfb, thresholds.ttfb_ms, 0, "ms"));

    let score = performance_score(vitals);
    println!("  Score {} {}", score_bar(score, BAR_WIDTH), colorize_score(score));
    println!();
}

pub fn print_seo(metrics: &SeoMetrics) {
    print_section_header("🔎 On-page SEO");
    let title = if metrics.page_title.trim().is_empty() {
        "(missing)".red().to_string()
    } else {
        sanitize_terminal(&metrics.page_title)
    };
    let description = if metrics.meta_description.trim().is_empty() {
        "(missing)".red().to_string()
    } else {
        sanitize_terminal(&metrics.meta_description)
    };
    println!("  Title        {title}");
    println!("  Description  {description}");
    println!(
        "  Headings     {} H1, {} H2",
        metrics.h1_count, metrics.h2_count
    );
    println!(
        "  Images       {} ({} with alt)",
        metrics.image_count, metrics.images_with_alt
    );
    println!(
        "  Links        {} internal, {} external",
        metrics.internal_links, metrics.external_links
    );
    println!("  Words        {}", metrics.word_count);
    println!(
        "  Structured   {}",
        if metrics.structured_data_present {
            "yes".green()
        } else {
            "no".yellow()
        }
    );
    println!(
        "  Canonical    {}",
        metrics
            .canonical_url
            .as_deref()
            .map_or_else(|| "-".dimmed().to_string(), sanitize_terminal)
    );
    println!(
        "  Robots       {}",
        metrics
            .meta_robots
            .as_deref()
            .map_or_else(|| "-".dimmed().to_string(), sanitize_terminal)
    );

    let score = seo_score(metrics);
    println!("  Score        {} {}", score_bar(score, BAR_WIDTH), colorize_score(score));
    println!();

    if !metrics.keyword_density.is_empty() {
        println!("{}", format_keyword_table(&metrics.keyword_density));
        println!();
    }
}

pub fn print_report(report: &PerformanceReport, thresholds: &ThresholdSet) {
    let summary = &report.summary;
    print_section_header(&format!(
        "📊 Performance report ({} snapshot(s))",
        summary.total_pages
    ));

    if summary.total_pages == 0 {
        println!("  {}", "No snapshots collected yet".dimmed());
        println!();
        return;
    }

    println!(
        "  Avg LCP   {}",
        colorize_metric(summary.average_lcp, thresholds.lcp_ms, 0, "ms")
    );
    println!(
        "  Avg FID   {}",
        colorize_metric(summary.average_fid, thresholds.fid_ms, 0, "ms")
    );
    println!(
        "  Avg CLS   {}",
        colorize_metric(summary.average_cls, thresholds.cls, 3, "")
    );
    println!(
        "  Avg FCP   {}",
        colorize_metric(summary.average_fcp, thresholds.fcp_ms, 0, "ms")
    );
    println!(
        "  Avg TTFB  {}",
        colorize_metric(summary.average_ttfb, thresholds.ttfb_ms, 0, "ms")
    );
    println!(
        "  Perf      {}",
        colorize_score(summary.average_performance_score)
    );
    println!("  SEO       {}", colorize_score(summary.average_seo_score));
    println!("  Active alerts: {}", summary.active_alerts);
    println!();

    if report.recommendations.is_empty() {
        println!("{}", "✅ No recommendations".green());
    } else {
        println!("{}", "Recommendations:".bold());
        for recommendation in &report.recommendations {
            println!("  • {recommendation}");
        }
    }
    println!();
}
