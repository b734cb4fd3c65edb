use colored::{ColoredString, Colorize};

/// Score at or above which a page counts as good.
const GOOD_SCORE: f64 = 90.0;
/// Score below which a page counts as poor.
const POOR_SCORE: f64 = 50.0;

/// Horizontal bar for a 0–100 score. Higher is better.
#[must_use]
pub fn score_bar(score: f64, width: usize) -> String {
    let ratio = (score / 100.0).clamp(0.0, 1.0);
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let bar_filled = "█".repeat(filled);
    let bar_empty = "░".repeat(empty);

    let colored_bar = if score >= GOOD_SCORE {
        bar_filled.green()
    } else if score >= POOR_SCORE {
        bar_filled.yellow()
    } else {
        bar_filled.red().bold()
    };

    format!("{colored_bar}{bar_empty}")
}

#[must_use]
pub fn colorize_score(score: f64) -> ColoredString {
    let text = format!("{score:.0}/100");
    if score >= GOOD_SCORE {
        text.green().bold()
    } else if score >= POOR_SCORE {
        text.yellow()
    } else {
        text.red().bold()
    }
}

/// Render a metric against its threshold: green within, red above.
#[must_use]
pub fn colorize_metric(value: f64, threshold: f64, precision: usize, unit: &str) -> ColoredString {
    let text = format!("{value:.precision$}{unit}");
    if value > threshold {
        text.red().bold()
    } else {
        text.green()
    }
}

pub fn print_section_header(title: &str) {
    println!("{}", title.bold().cyan());
    let display_width = title.chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}
