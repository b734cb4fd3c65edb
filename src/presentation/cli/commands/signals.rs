use crate::application::services::page_signals::PageSignalAnalyzer;
use crate::domain::ports::document::PageDocument;
use crate::presentation::cli::formatters::report_fmt;

/// Analyze on-page signals only, without measuring vitals or raising alerts.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run_signals(
    analyzer: &PageSignalAnalyzer,
    document: &dyn PageDocument,
    json: bool,
) -> anyhow::Result<()> {
    let metrics = analyzer.analyze(document);

    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        report_fmt::print_seo(&metrics);
    }

    Ok(())
}
