//! The timesheet row model.
//!
//! A [`TimesheetRow`] is one worker's shift on one date. Rows keep their
//! times in the canonical external form (`hh:mm AM/PM`); the 24-hour editing
//! form is derived on demand.

use super::time::{elapsed_hours, normalize_12_hour, to_12_hour, to_24_hour};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical column header, in column order.
pub const HEADER: &str = "Date,Job Site,Worker Name,Start,End,Hours";

/// The six named columns of a timesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TimesheetField {
    Date,
    JobSite,
    Worker,
    Start,
    End,
    Hours,
}

impl TimesheetField {
    pub const ALL: [TimesheetField; 6] = [
        TimesheetField::Date,
        TimesheetField::JobSite,
        TimesheetField::Worker,
        TimesheetField::Start,
        TimesheetField::End,
        TimesheetField::Hours,
    ];

    /// Header label as written in canonical CSV.
    pub fn label(&self) -> &'static str {
        match self {
            TimesheetField::Date => "Date",
            TimesheetField::JobSite => "Job Site",
            TimesheetField::Worker => "Worker Name",
            TimesheetField::Start => "Start",
            TimesheetField::End => "End",
            TimesheetField::Hours => "Hours",
        }
    }

    /// Matches a header cell, ignoring case and surrounding whitespace.
    ///
    /// `worker` is accepted as an alias of `worker name`.
    pub fn from_header(cell: &str) -> Option<Self> {
        match cell.trim().to_lowercase().as_str() {
            "date" => Some(TimesheetField::Date),
            "job site" => Some(TimesheetField::JobSite),
            "worker name" | "worker" => Some(TimesheetField::Worker),
            "start" => Some(TimesheetField::Start),
            "end" => Some(TimesheetField::End),
            "hours" => Some(TimesheetField::Hours),
            _ => None,
        }
    }
}

impl fmt::Display for TimesheetField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TimesheetField {
    type Err = super::error::TimesheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', '_'], " ");
        Self::from_header(&normalized).ok_or_else(|| super::error::TimesheetError::UnknownField(s.to_string()))
    }
}

/// One worker-date-shift record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimesheetRow {
    /// `MM/DD/YYYY`, or empty when the date is unknown.
    pub date: String,
    pub job_site: String,
    pub worker: String,
    /// `hh:mm AM/PM`, or empty.
    pub start: String,
    /// `hh:mm AM/PM`, or empty.
    pub end: String,
    /// Quarter-hour decimal hours; `None` when blank.
    pub hours: Option<f64>,
}

/// Replaces commas with spaces and trims, so a value can never split a
/// positional CSV column.
pub fn sanitize_text(value: &str) -> String {
    value.replace(',', " ").trim().to_string()
}

/// Reads an hours cell the way a numeric input does: the longest leading
/// part that reads as a number counts (`1.2.3` is `1.2`), anything
/// unreadable or negative is blank.
pub fn parse_hours(value: &str) -> Option<f64> {
    let numeric: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
        .collect();
    (1..=numeric.len())
        .rev()
        .find_map(|len| numeric[..len].parse::<f64>().ok())
        .filter(|h| h.is_finite() && *h >= 0.0)
}

/// Two-decimal external form of an hours value; blank stays blank.
pub fn format_hours_cell(hours: Option<f64>) -> String {
    hours.map(|h| format!("{:.2}", h)).unwrap_or_default()
}

impl TimesheetRow {
    /// Builds a row from raw cell values, normalizing every field.
    pub fn from_cells(date: &str, job_site: &str, worker: &str, start: &str, end: &str, hours: &str) -> Self {
        Self {
            date: sanitize_text(date),
            job_site: sanitize_text(job_site),
            worker: sanitize_text(worker),
            start: normalize_12_hour(start),
            end: normalize_12_hour(end),
            hours: parse_hours(hours),
        }
        .with_hours_filled()
    }

    /// A row with no worker, no times and no hours carries nothing worth
    /// keeping and is dropped.
    pub fn is_blank(&self) -> bool {
        self.worker.trim().is_empty() && self.start.trim().is_empty() && self.end.trim().is_empty() && self.hours.is_none()
    }

    /// Hours as a number for summing; blank counts as zero.
    pub fn hours_value(&self) -> f64 {
        self.hours.unwrap_or(0.0)
    }

    pub fn start_24(&self) -> String {
        to_24_hour(&self.start)
    }

    pub fn end_24(&self) -> String {
        to_24_hour(&self.end)
    }

    /// Shift length from the start/end pair, if the pair is valid.
    pub fn computed_hours(&self) -> Option<f64> {
        parse_hours(&elapsed_hours(&self.start_24(), &self.end_24()))
    }

    /// Fills blank hours from start/end when possible.
    pub fn with_hours_filled(mut self) -> Self {
        if self.hours.is_none() {
            self.hours = self.computed_hours();
        }
        self
    }

    /// Recomputes hours after a time edit.
    ///
    /// With both times present the result follows the pair exactly, blank for
    /// an inverted or zero-length pair. With a time missing, hours keep their
    /// manually entered value.
    pub fn recalculate_hours(&mut self) {
        if self.start.is_empty() || self.end.is_empty() {
            return;
        }
        self.hours = self.computed_hours();
    }

    pub fn set_start_24(&mut self, time24: &str) {
        self.start = to_12_hour(time24);
        self.recalculate_hours();
    }

    pub fn set_end_24(&mut self, time24: &str) {
        self.end = to_12_hour(time24);
        self.recalculate_hours();
    }

    /// External (canonical CSV) value of one field.
    pub fn get(&self, field: TimesheetField) -> String {
        match field {
            TimesheetField::Date => self.date.clone(),
            TimesheetField::JobSite => self.job_site.clone(),
            TimesheetField::Worker => self.worker.clone(),
            TimesheetField::Start => self.start.clone(),
            TimesheetField::End => self.end.clone(),
            TimesheetField::Hours => format_hours_cell(self.hours),
        }
    }

    /// All six external values in canonical column order.
    pub fn cells(&self) -> Vec<String> {
        TimesheetField::ALL.iter().map(|field| self.get(*field)).collect()
    }
}
