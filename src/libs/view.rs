use super::aggregate::{summarize_by_worker, total_hours};
use super::codec::TOTAL_LABEL;
use super::date::short_date;
use super::formatter::format_hours;
use super::row::{format_hours_cell, TimesheetRow};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Numbered row table; dates are shown as `MM/DD`.
    pub fn rows(rows: &[TimesheetRow]) -> Table {
        let mut table = Table::new();
        table.add_row(row!["#", "DATE", "JOB SITE", "WORKER", "START", "END", "HOURS"]);
        for (idx, r) in rows.iter().enumerate() {
            table.add_row(row![
                idx + 1,
                short_date(&r.date),
                r.job_site,
                r.worker,
                r.start,
                r.end,
                format_hours_cell(r.hours)
            ]);
        }
        table
    }

    /// Per-worker totals followed by the overall total.
    pub fn summary(rows: &[TimesheetRow]) -> Table {
        let mut table = Table::new();
        table.add_row(row!["WORKER", "HOURS"]);
        for summary in summarize_by_worker(rows) {
            table.add_row(row![summary.worker, format_hours(summary.total)]);
        }
        table.add_row(row![TOTAL_LABEL, format_hours(total_hours(rows))]);
        table
    }

    pub fn print_rows(rows: &[TimesheetRow]) {
        Self::rows(rows).printstd();
    }

    pub fn print_summary(rows: &[TimesheetRow]) {
        Self::summary(rows).printstd();
    }
}
