//! Console rendering of comparison reports

use console::style;

use crate::comparator::{ComparisonReport, ComparisonRow, Delta, FieldTotals, SizeRecord};
use crate::fmt::{format_bytes, format_signed_bytes, CHART, PACKAGE};

/// Print a comparison report to the console
///
/// Shows per-field aggregate totals, the per-module rows (growth red,
/// reduction green), and the added/removed module lists. `limit` caps the
/// number of rows displayed; totals always cover the full matched set.
pub fn print_comparison_report(report: &ComparisonReport, limit: Option<usize>) {
    println!();
    println!(
        "{} {}",
        CHART,
        style("Bundle Snapshot Comparison").bold().underlined()
    );
    println!();

    print_totals_line("Stat size:  ", &report.totals.stat_size);
    print_totals_line("Parsed size:", &report.totals.parsed_size);
    print_totals_line("Gzip size:  ", &report.totals.gzip_size);
    println!();

    if !report.rows.is_empty() {
        println!(
            "{}",
            style(format!("CHANGED MODULES ({} matched):", report.rows.len())).bold()
        );
        println!("{}", style("─".repeat(70)).dim());

        let display_count = limit.unwrap_or(report.rows.len()).min(report.rows.len());
        for row in report.rows.iter().take(display_count) {
            print_row(row);
        }

        if report.rows.len() > display_count {
            println!(
                "\n      {} {} more modules...",
                style("...").dim(),
                report.rows.len() - display_count
            );
        }

        println!();
    }

    print_record_section("ADDED", &report.added, console::Color::Red);
    print_record_section("REMOVED", &report.removed, console::Color::Green);
}

fn print_totals_line(name: &str, totals: &FieldTotals) {
    let delta_str = style(format_signed_bytes(totals.diff))
        .fg(diff_color(totals.diff))
        .bold();

    println!(
        "{} {} {} → {}  ({})",
        PACKAGE,
        style(name).bold(),
        format_bytes(totals.old_total),
        format_bytes(totals.new_total),
        delta_str
    );
}

fn print_row(row: &ComparisonRow) {
    println!(
        "  {}  {}",
        format_delta_cell(&row.parsed_size),
        style(&row.label).dim()
    );
    println!(
        "      stat {}  gzip {}",
        style(format_delta_compact(&row.stat_size)).dim(),
        style(format_delta_compact(&row.gzip_size)).dim()
    );
}

fn format_delta_cell(delta: &Delta) -> String {
    let arrow = if delta.diff > 0.0 {
        "↑"
    } else if delta.diff < 0.0 {
        "↓"
    } else {
        "="
    };

    format!(
        "{} {:>10} ({}{:.2}%)",
        style(arrow).fg(diff_color(delta.diff)),
        style(format_signed_bytes(delta.diff))
            .fg(diff_color(delta.diff))
            .bold(),
        if delta.diff < 0.0 { "-" } else { "+" },
        delta.percentage
    )
}

fn format_delta_compact(delta: &Delta) -> String {
    format!(
        "{} ({}{:.2}%)",
        format_signed_bytes(delta.diff),
        if delta.diff < 0.0 { "-" } else { "+" },
        delta.percentage
    )
}

fn print_record_section(title: &str, records: &[SizeRecord], color: console::Color) {
    if records.is_empty() {
        return;
    }

    println!(
        "{}",
        style(format!("{} ({} modules):", title, records.len()))
            .bold()
            .fg(color)
    );
    println!("{}", style("─".repeat(70)).dim());

    for record in records {
        println!(
            "  {:>10}  {}",
            style(format_bytes(record.parsed_size)).fg(color),
            style(&record.label).dim()
        );
    }

    println!();
}

fn diff_color(diff: f64) -> console::Color {
    if diff < 0.0 {
        console::Color::Green
    } else if diff > 0.0 {
        console::Color::Red
    } else {
        console::Color::White
    }
}
