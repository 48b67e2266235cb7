//! Grouping, ordering and totals over timesheet rows.
//!
//! All ordering uses the same chain of keys: date key, start-time key,
//! worker name compared case-insensitively. Dates or times that cannot be
//! read sort last. Sorting is stable, so rows that tie on every key keep
//! their input order.

use super::date::{date_sort_key, NO_DATE};
use super::row::TimesheetRow;
use super::sort_key::SortKey;
use super::time::time_sort_key;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Sentinel worker label for rows without a name.
pub const NO_NAME: &str = "(no name)";
/// Fallback when no row carries a job site.
pub const DEFAULT_JOB_SITE: &str = "Job Site";

/// Rows sharing one date, in start-time order.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup {
    /// The row date, or [`NO_DATE`].
    pub date: String,
    pub key: SortKey,
    pub rows: Vec<TimesheetRow>,
}

/// Hours for one worker, in total and per date.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerSummary {
    /// Worker name as displayed, or [`NO_NAME`].
    pub worker: String,
    pub total: f64,
    /// `(date or NO_DATE, hours)` in date-key order.
    pub per_date: Vec<(String, f64)>,
}

fn by_worker(a: &TimesheetRow, b: &TimesheetRow) -> Ordering {
    a.worker.to_lowercase().cmp(&b.worker.to_lowercase())
}

fn by_start_then_worker(a: &TimesheetRow, b: &TimesheetRow) -> Ordering {
    time_sort_key(&a.start).cmp(&time_sort_key(&b.start)).then_with(|| by_worker(a, b))
}

/// Global row order: date, start time, worker, then job site.
pub fn compare_rows(a: &TimesheetRow, b: &TimesheetRow) -> Ordering {
    date_sort_key(&a.date)
        .cmp(&date_sort_key(&b.date))
        .then_with(|| by_start_then_worker(a, b))
        .then_with(|| a.job_site.to_lowercase().cmp(&b.job_site.to_lowercase()))
}

pub fn sort_rows(rows: &mut [TimesheetRow]) {
    rows.sort_by(compare_rows);
}

/// Groups rows by date. Groups are ordered by date key; rows inside a group
/// by start time, ties broken by worker name.
pub fn group_by_date(rows: &[TimesheetRow]) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let date = if row.date.is_empty() { NO_DATE.to_string() } else { row.date.clone() };
        let slot = *index.entry(date.clone()).or_insert_with(|| {
            groups.push(DateGroup {
                key: date_sort_key(&date),
                date: date.clone(),
                rows: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].rows.push(row.clone());
    }

    groups.sort_by_key(|g| g.key);
    for group in &mut groups {
        group.rows.sort_by(by_start_then_worker);
    }
    groups
}

/// Totals per worker. Workers are ordered by name ignoring case; each
/// worker's per-date entries by date key.
pub fn summarize_by_worker(rows: &[TimesheetRow]) -> Vec<WorkerSummary> {
    let mut summaries: Vec<WorkerSummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let worker = if row.worker.is_empty() { NO_NAME.to_string() } else { row.worker.clone() };
        let date = if row.date.is_empty() { NO_DATE.to_string() } else { row.date.clone() };
        let hours = row.hours_value();

        let slot = *index.entry(worker.clone()).or_insert_with(|| {
            summaries.push(WorkerSummary {
                worker,
                total: 0.0,
                per_date: Vec::new(),
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[slot];
        summary.total += hours;
        match summary.per_date.iter_mut().find(|(d, _)| *d == date) {
            Some((_, subtotal)) => *subtotal += hours,
            None => summary.per_date.push((date, hours)),
        }
    }

    summaries.sort_by(|a, b| a.worker.to_lowercase().cmp(&b.worker.to_lowercase()));
    for summary in &mut summaries {
        summary.per_date.sort_by_key(|(date, _)| date_sort_key(date));
    }
    summaries
}

/// Most frequent non-empty job site. On a tie the site seen first wins.
pub fn pick_primary_job_site(rows: &[TimesheetRow]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for row in rows {
        let site = row.job_site.trim();
        if site.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(s, _)| *s == site) {
            Some((_, count)) => *count += 1,
            None => counts.push((site, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (site, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((site, count));
        }
    }
    best.map(|(site, _)| site.to_string()).unwrap_or_else(|| DEFAULT_JOB_SITE.to_string())
}

/// Sum of all hours; blank hours count as zero.
pub fn total_hours(rows: &[TimesheetRow]) -> f64 {
    rows.iter().map(TimesheetRow::hours_value).sum()
}

/// Distinct dates, earliest first, ignoring rows without a date.
pub fn date_range(rows: &[TimesheetRow]) -> Option<(String, String)> {
    let mut dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).filter(|d| !d.is_empty() && *d != NO_DATE).collect();
    dates.sort_by_key(|d| date_sort_key(d));
    let first = dates.first()?.to_string();
    let last = dates.last().map(|d| d.to_string()).unwrap_or_else(|| first.clone());
    Some((first, last))
}

/// Aggregation helpers available directly on row slices.
pub trait TimesheetRows {
    fn group_by_date(&self) -> Vec<DateGroup>;
    fn summarize_by_worker(&self) -> Vec<WorkerSummary>;
    fn primary_job_site(&self) -> String;
    fn total_hours(&self) -> f64;
    fn sorted(&self) -> Vec<TimesheetRow>;
}

impl TimesheetRows for [TimesheetRow] {
    fn group_by_date(&self) -> Vec<DateGroup> {
        group_by_date(self)
    }

    fn summarize_by_worker(&self) -> Vec<WorkerSummary> {
        summarize_by_worker(self)
    }

    fn primary_job_site(&self) -> String {
        pick_primary_job_site(self)
    }

    fn total_hours(&self) -> f64 {
        total_hours(self)
    }

    fn sorted(&self) -> Vec<TimesheetRow> {
        let mut rows = self.to_vec();
        sort_rows(&mut rows);
        rows
    }
}
