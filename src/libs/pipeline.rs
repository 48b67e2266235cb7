//! Turns raw language-model output into canonical timesheet CSV.

use super::aggregate::sort_rows;
use super::codec::{self, strip_model_noise, SummaryStyle};
use super::error::TimesheetResult;
use super::row::TimesheetRow;
use serde::Serialize;
use tracing::{debug, warn};

/// Canonical CSV together with the rows it was built from.
#[derive(Debug, Clone, Serialize)]
pub struct BuiltTimesheet {
    pub csv: String,
    pub rows: Vec<TimesheetRow>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimesheetPipeline {
    summary_style: SummaryStyle,
}

impl TimesheetPipeline {
    pub fn new(summary_style: SummaryStyle) -> Self {
        Self { summary_style }
    }

    /// Cleans model noise, parses, normalizes and sorts the rows, then
    /// serializes them with a recomputed summary block. Any summary lines in
    /// the input are discarded.
    ///
    /// # Errors
    ///
    /// [`TimesheetError::MissingHeader`](super::error::TimesheetError::MissingHeader)
    /// when the output contains no `Date,` header line.
    pub fn build(&self, raw: &str) -> TimesheetResult<BuiltTimesheet> {
        let cleaned = strip_model_noise(raw);
        let parsed = codec::parse(&cleaned)?;
        if parsed.rows.is_empty() {
            warn!("model output has a header but no worker rows");
        }

        let mut rows = parsed.rows;
        sort_rows(&mut rows);
        let csv = codec::serialize(&rows, self.summary_style);
        debug!(rows = rows.len(), style = ?self.summary_style, "timesheet built");

        Ok(BuiltTimesheet { csv, rows })
    }
}
