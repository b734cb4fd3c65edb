use colored::Colorize;

use crate::domain::entities::alert::Alert;
use crate::domain::value_objects::alert_type::AlertType;

/// Strips ANSI/OSC escape sequences from a string to prevent terminal injection.
///
/// Page titles, URLs and messages come from captured documents, so they are
/// untrusted input.
pub(crate) fn sanitize_terminal(input: &str) -> String {
    input.chars().filter(|c| *c != '\x1b').collect()
}

fn type_badge(alert_type: AlertType) -> String {
    let label = format!(" {alert_type} ");
    match alert_type {
        AlertType::Error => format!("{}", label.on_red().white().bold()),
        AlertType::Warning => format!("{}", label.on_yellow().black().bold()),
        AlertType::Info => format!("{}", label.on_blue().white()),
    }
}

pub fn format_alerts(alerts: &[Alert]) {
    for alert in alerts {
        println!();
        println!(
            "{} {} {}",
            type_badge(alert.alert_type),
            alert.alert_type.emoji(),
            sanitize_terminal(&alert.message).bold()
        );
        println!(
            "  {} {}",
            alert.rule.dimmed(),
            sanitize_terminal(&alert.id).dimmed()
        );
    }
    println!();
}

pub fn print_no_alerts() {
    println!();
    println!("{}", "✅ Page healthy, no alerts raised".green().bold());
    println!();
}
