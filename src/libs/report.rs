//! Plain-text report building.
//!
//! One builder, two layouts selected by [`ReportMode`]:
//!
//! ```text
//! Detailed                              Compact
//! ---------------------------------     -----------------------------
//! Job: Expo Hall                        Expo Hall work hrs
//! Dates Worked: 01/02/2024
//! Location: Expo Hall                   Sam   8am - 12pm   4hrs
//!
//! -- DAILY BREAKDOWN --
//!
//! 01/02/2024:
//! - Sam: 08:00 AM to 12:00 PM (4.00 hrs)
//!
//! -- SUMMARY BY WORKER --
//!
//! Sam:
//! - 01/02/2024: 4.00 hrs
//! Total: 4.00 hrs
//! ```

use super::aggregate::{date_range, group_by_date, pick_primary_job_site, sort_rows, summarize_by_worker};
use super::date::NO_DATE;
use super::formatter::{format_hours, format_hours_breakdown, format_hours_compact, format_time_compact};
use super::row::TimesheetRow;
use serde::{Deserialize, Serialize};

/// Returned instead of a report when there are no rows.
pub const NO_ROWS_MESSAGE: &str = "No rows found in the timesheet table.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReportMode {
    /// Header, daily breakdown, per-worker summary and notes.
    #[default]
    Detailed,
    /// Title line and one line per shift.
    Compact,
}

/// Builds the report text for `rows`. Rows are sorted internally, and the
/// primary job site is picked from the sorted rows, so the input order does
/// not matter. Notes are trimmed and left out when empty.
pub fn build_report(rows: &[TimesheetRow], notes: &str, mode: ReportMode) -> String {
    if rows.is_empty() {
        return NO_ROWS_MESSAGE.to_string();
    }

    let mut sorted = rows.to_vec();
    sort_rows(&mut sorted);

    let notes = notes.trim();
    match mode {
        ReportMode::Detailed => detailed(&sorted, notes),
        ReportMode::Compact => compact(&sorted, notes),
    }
}

fn detailed(rows: &[TimesheetRow], notes: &str) -> String {
    let site = pick_primary_job_site(rows);
    let dates = match date_range(rows) {
        Some((first, last)) if first != last => format!("{} - {}", first, last),
        Some((first, _)) => first,
        None => NO_DATE.to_string(),
    };

    let mut lines = vec![
        format!("Job: {}", site),
        format!("Dates Worked: {}", dates),
        format!("Location: {}", site),
        String::new(),
        "-- DAILY BREAKDOWN --".to_string(),
        String::new(),
    ];

    for group in group_by_date(rows) {
        let label = if group.date == NO_DATE { "No specific date" } else { group.date.as_str() };
        lines.push(format!("{}:", label));
        for row in &group.rows {
            lines.push(format!(
                "- {}: {} to {} ({} hrs)",
                row.worker,
                row.start,
                row.end,
                format_hours_breakdown(row.hours)
            ));
        }
        lines.push(String::new());
    }

    lines.push("-- SUMMARY BY WORKER --".to_string());
    lines.push(String::new());

    for summary in summarize_by_worker(rows) {
        lines.push(format!("{}:", summary.worker));
        for (date, hours) in &summary.per_date {
            let label = if date == NO_DATE { "No date" } else { date.as_str() };
            lines.push(format!("- {}: {} hrs", label, format_hours(*hours)));
        }
        lines.push(format!("Total: {} hrs", format_hours(summary.total)));
        lines.push(String::new());
    }

    if !notes.is_empty() {
        lines.push("-- NOTES --".to_string());
        lines.push(notes.to_string());
    }

    lines.join("\n")
}

fn compact(rows: &[TimesheetRow], notes: &str) -> String {
    let mut lines = vec![format!("{} work hrs", pick_primary_job_site(rows)), String::new()];
    for row in rows {
        lines.push(format!(
            "{}   {} - {}   {}hrs",
            row.worker,
            format_time_compact(&row.start),
            format_time_compact(&row.end),
            format_hours_compact(row.hours_value())
        ));
    }

    if !notes.is_empty() {
        lines.push(String::new());
        lines.push(notes.to_string());
    }

    lines.join("\n")
}
