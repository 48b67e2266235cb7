//! Editable timesheet state for one user session.
//!
//! A [`TimesheetSession`] holds what a user is currently working on: the rows
//! parsed from the last CSV, any edits made since, and the most recent CSV
//! text. Nothing is shared between sessions and nothing is persisted.
//!
//! ## Examples
//!
//! ```rust
//! use crewsheet::libs::codec::SummaryStyle;
//! use crewsheet::libs::row::TimesheetField;
//! use crewsheet::libs::session::TimesheetSession;
//!
//! let mut session = TimesheetSession::new(SummaryStyle::PerWorker);
//! session.load_csv("Date,Job Site,Worker Name,Start,End,Hours\n01/02/2024,Expo Hall,Sam,08:00 AM,12:00 PM,")?;
//! assert_eq!(session.rows()[0].hours, Some(4.0));
//!
//! session.edit_cell(0, TimesheetField::End, "13:00")?;
//! assert_eq!(session.rows()[0].hours, Some(5.0));
//! # Ok::<(), crewsheet::libs::error::TimesheetError>(())
//! ```

use super::aggregate::sort_rows;
use super::codec::{self, SummaryStyle};
use super::date::{current_year, expand_short_date};
use super::error::{TimesheetError, TimesheetResult};
use super::report::{build_report, ReportMode};
use super::row::{parse_hours, sanitize_text, TimesheetField, TimesheetRow};
use super::time::to_24_hour;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct TimesheetSession {
    header: Option<String>,
    rows: Vec<TimesheetRow>,
    csv: Option<String>,
    summary_style: SummaryStyle,
}

impl TimesheetSession {
    pub fn new(summary_style: SummaryStyle) -> Self {
        Self {
            summary_style,
            ..Self::default()
        }
    }

    /// Replaces the session content with the rows of `text`, sorted into
    /// display order. Returns the number of rows loaded.
    ///
    /// On error the previous content is kept.
    pub fn load_csv(&mut self, text: &str) -> TimesheetResult<usize> {
        let parsed = codec::parse(text)?;
        let mut rows = parsed.rows;
        sort_rows(&mut rows);

        self.header = Some(parsed.header);
        self.rows = rows;
        self.csv = Some(text.to_string());
        debug!(rows = self.rows.len(), "session loaded csv");
        Ok(self.rows.len())
    }

    pub fn rows(&self) -> &[TimesheetRow] {
        &self.rows
    }

    /// Header line of the last loaded CSV, as received.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Most recent CSV text, loaded or rebuilt.
    pub fn csv(&self) -> Option<&str> {
        self.csv.as_deref()
    }

    pub fn summary_style(&self) -> SummaryStyle {
        self.summary_style
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn row_mut(&mut self, index: usize) -> TimesheetResult<&mut TimesheetRow> {
        self.rows.get_mut(index).ok_or(TimesheetError::RowOutOfRange(index))
    }

    /// Edits one cell of the row at `index` (zero based).
    ///
    /// - `Start`/`End` take `HH:MM` (12-hour text is accepted too); with both
    ///   times set, hours follow the pair.
    /// - `Hours` takes a number; anything else blanks the cell.
    /// - `Date` takes `MM/DD/YYYY`, or `MM/DD` which gets the current year.
    /// - Text fields lose their commas.
    pub fn edit_cell(&mut self, index: usize, field: TimesheetField, value: &str) -> TimesheetResult<&TimesheetRow> {
        let row = self.row_mut(index)?;
        match field {
            TimesheetField::Date => row.date = expand_short_date(&sanitize_text(value), current_year()),
            TimesheetField::JobSite => row.job_site = sanitize_text(value),
            TimesheetField::Worker => row.worker = sanitize_text(value),
            TimesheetField::Start => row.set_start_24(&to_24_hour(value)),
            TimesheetField::End => row.set_end_24(&to_24_hour(value)),
            TimesheetField::Hours => row.hours = parse_hours(value),
        }
        debug!(index, %field, "cell edited");
        Ok(&self.rows[index])
    }

    /// Appends a row and returns its index. Blank hours are filled from the
    /// times when possible.
    pub fn add_row(&mut self, row: TimesheetRow) -> usize {
        self.rows.push(row.with_hours_filled());
        self.rows.len() - 1
    }

    pub fn remove_row(&mut self, index: usize) -> TimesheetResult<TimesheetRow> {
        if index >= self.rows.len() {
            return Err(TimesheetError::RowOutOfRange(index));
        }
        Ok(self.rows.remove(index))
    }

    /// Rebuilds the CSV from the current rows with a fresh summary block and
    /// keeps it as the current CSV.
    ///
    /// With no rows the last CSV is returned unchanged; with neither, the
    /// call fails with [`TimesheetError::NoRows`].
    pub fn to_csv(&mut self) -> TimesheetResult<String> {
        if self.rows.is_empty() {
            return self.csv.clone().ok_or(TimesheetError::NoRows);
        }
        let text = codec::serialize(&self.rows, self.summary_style);
        self.csv = Some(text.clone());
        Ok(text)
    }

    pub fn report(&self, notes: &str, mode: ReportMode) -> String {
        build_report(&self.rows, notes, mode)
    }

    pub fn clear(&mut self) {
        self.header = None;
        self.rows.clear();
        self.csv = None;
    }
}
