//! Error type for the timesheet core.
//!
//! Field-level problems (a bad date, an unreadable time) never surface here:
//! they degrade to blank values or the unknown sort key. Only failures that
//! stop a whole operation are represented.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimesheetError {
    #[error("No valid CSV header returned")]
    MissingHeader,

    #[error("No rows found in the timesheet table.")]
    NoRows,

    #[error("Row {0} does not exist")]
    RowOutOfRange(usize),

    #[error("Unknown timesheet field: {0}")]
    UnknownField(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TimesheetResult<T> = Result<T, TimesheetError>;
