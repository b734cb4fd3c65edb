use std::collections::BTreeMap;

use colored::Colorize;

/// Density above which a keyword counts as stuffed.
const STUFFING_DENSITY: f64 = 5.0;

/// Formats keyword densities as an aligned table, densest first.
///
/// # Returns
///
/// A multi-line string with header, separator, and keyword rows.
#[must_use]
pub fn format_keyword_table(density: &BTreeMap<String, f64>) -> String {
    let mut sorted: Vec<(&String, &f64)> = density.iter().collect();
    sorted.sort_by(|a, b| b.1.total_cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let header = format!("{:<20} {:>9}", "KEYWORD", "DENSITY%");
    let separator = "─".repeat(header.chars().count());

    let mut rows = vec![header, separator];

    for (keyword, value) in sorted {
        let name: String = keyword.chars().take(19).collect();
        let row = format!("{name:<20} {value:>9.2}");
        if *value > STUFFING_DENSITY {
            rows.push(row.red().to_string());
        } else if value.abs() < f64::EPSILON {
            rows.push(row.dimmed().to_string());
        } else {
            rows.push(row);
        }
    }

    rows.join("\n")
}
