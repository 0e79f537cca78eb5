//! Report display formatting

use crate::config::Settings;
use crate::reports::SpendingReport;

/// Format a spending report as a category breakdown table
pub fn format_spending_report(report: &SpendingReport, settings: &Settings) -> String {
    if report.categories.is_empty() {
        return "No spending to report.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:2} {:15} {:>5} {:>12} {:>7}\n",
        "", "Category", "Count", "Total", "%"
    ));
    output.push_str(&"-".repeat(45));
    output.push('\n');

    for entry in &report.categories {
        output.push_str(&format!(
            "{:2} {:15} {:>5} {:>12} {:>6.1}%\n",
            entry.category.icon(),
            entry.category.name(),
            entry.count,
            entry.total.format_with_symbol(&settings.currency_symbol),
            entry.percentage,
        ));
    }

    output.push_str(&"-".repeat(45));
    output.push('\n');
    output.push_str(&format!(
        "{:18} {:>5} {:>12}\n",
        "Total",
        report.count,
        report.total.format_with_symbol(&settings.currency_symbol)
    ));

    output
}
