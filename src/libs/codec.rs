//! Timesheet CSV parsing and serialization.
//!
//! The wire format is positional and unquoted:
//!
//! ```text
//! Date,Job Site,Worker Name,Start,End,Hours
//! 01/02/2024,Expo Hall,Sam,08:00 AM,04:00 PM,8.00
//!
//! Summary,Sam,8.00
//! Summary,Total Hours Overall,8.00
//! ```
//!
//! Fields are split on `,` with no quoting or escaping, which is why every
//! free-text value is stripped of commas before it is written (see
//! [`sanitize_text`](super::row::sanitize_text)). Columns are located by
//! header name once per parse through [`ColumnMap`]; a missing column reads
//! as empty rather than failing the parse.

use super::aggregate::{summarize_by_worker, total_hours};
use super::error::{TimesheetError, TimesheetResult};
use super::row::{TimesheetField, TimesheetRow, HEADER};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Literal prefix of summary lines.
pub const SUMMARY_PREFIX: &str = "Summary,";
/// Label of the final summary line.
pub const TOTAL_LABEL: &str = "Total Hours Overall";

/// Which summary block follows the data rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryStyle {
    /// One `Summary,<worker>,<total>` line per worker.
    #[default]
    PerWorker,
    /// A label line, then one `Summary,<worker> - <date>,<hours>` line per
    /// worker and date.
    PerWorkerDate,
}

/// Column positions resolved from a header line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    positions: [Option<usize>; 6],
}

impl ColumnMap {
    /// Resolves positions from header cells, case-insensitively. The first
    /// occurrence of a label wins.
    pub fn from_cells(cells: &[String]) -> Self {
        let mut positions = [None; 6];
        for (idx, cell) in cells.iter().enumerate() {
            if let Some(field) = TimesheetField::from_header(cell) {
                let slot = &mut positions[Self::slot(field)];
                if slot.is_none() {
                    *slot = Some(idx);
                }
            }
        }
        Self { positions }
    }

    fn slot(field: TimesheetField) -> usize {
        TimesheetField::ALL.iter().position(|f| *f == field).unwrap_or(0)
    }

    pub fn position(&self, field: TimesheetField) -> Option<usize> {
        self.positions[Self::slot(field)]
    }

    /// Cell for `field`, or `""` when the column or the cell is missing.
    pub fn cell<'a>(&self, cells: &'a [String], field: TimesheetField) -> &'a str {
        self.position(field).and_then(|idx| cells.get(idx)).map(String::as_str).unwrap_or("")
    }

    pub fn missing(&self) -> Vec<TimesheetField> {
        TimesheetField::ALL.iter().copied().filter(|f| self.position(*f).is_none()).collect()
    }
}

/// Result of parsing CSV text.
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    /// Header line exactly as received.
    pub header: String,
    pub columns: ColumnMap,
    /// Data rows in input order, blank rows dropped.
    pub rows: Vec<TimesheetRow>,
    /// `Summary,` lines as received.
    pub summary_lines: Vec<String>,
}

fn is_header_line(line: &str) -> bool {
    line.to_lowercase().starts_with("date,")
}

/// Drops the markdown fences and `csv` labels a language model tends to wrap
/// around its output.
pub fn strip_model_noise(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.starts_with("```") && !l.to_lowercase().starts_with("csv"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits lines into positional cells. Quoting is disabled so a `"` is just
/// another character.
fn split_cells(lines: &[&str]) -> TimesheetResult<Vec<Vec<String>>> {
    let body = lines.join("\n");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut records = Vec::with_capacity(lines.len());
    for record in reader.records() {
        records.push(record?.iter().map(str::to_string).collect());
    }
    Ok(records)
}

/// Parses CSV text into rows and summary lines.
///
/// The header is the first line starting with `date,` (any case). Lines after
/// it are data rows up to the first `Summary,` line; from there on only
/// `Summary,` lines are collected. Repeated header lines are skipped.
///
/// # Errors
///
/// [`TimesheetError::MissingHeader`] when no header line exists.
pub fn parse(text: &str) -> TimesheetResult<ParsedCsv> {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let header_idx = lines.iter().position(|l| is_header_line(l)).ok_or(TimesheetError::MissingHeader)?;
    let header = lines[header_idx];

    let mut data_lines = Vec::new();
    let mut summary_lines = Vec::new();
    for line in &lines[header_idx + 1..] {
        if is_header_line(line) {
            continue;
        }
        if line.starts_with(SUMMARY_PREFIX) {
            summary_lines.push(line.to_string());
        } else if summary_lines.is_empty() {
            data_lines.push(*line);
        }
    }

    let header_cells = split_cells(&[header])?.into_iter().next().unwrap_or_default();
    let columns = ColumnMap::from_cells(&header_cells);
    let missing = columns.missing();
    if !missing.is_empty() {
        debug!(?missing, "header lacks expected columns");
    }

    let rows: Vec<TimesheetRow> = split_cells(&data_lines)?
        .iter()
        .map(|cells| {
            TimesheetRow::from_cells(
                columns.cell(cells, TimesheetField::Date),
                columns.cell(cells, TimesheetField::JobSite),
                columns.cell(cells, TimesheetField::Worker),
                columns.cell(cells, TimesheetField::Start),
                columns.cell(cells, TimesheetField::End),
                columns.cell(cells, TimesheetField::Hours),
            )
        })
        .filter(|row| !row.is_blank())
        .collect();

    debug!(rows = rows.len(), summaries = summary_lines.len(), "parsed timesheet csv");

    Ok(ParsedCsv {
        header: header.to_string(),
        columns,
        rows,
        summary_lines,
    })
}

/// Summary lines recomputed from `rows`, ending with the overall total.
///
/// The per-worker-date block leaves out rows without a worker name, in its
/// lines and in the total.
pub fn summary_lines(rows: &[TimesheetRow], style: SummaryStyle) -> Vec<String> {
    let counted: Vec<TimesheetRow> = match style {
        SummaryStyle::PerWorker => rows.to_vec(),
        SummaryStyle::PerWorkerDate => rows.iter().filter(|r| !r.worker.trim().is_empty()).cloned().collect(),
    };
    let mut lines = Vec::new();
    let workers = summarize_by_worker(&counted);

    match style {
        SummaryStyle::PerWorker => {
            for summary in &workers {
                lines.push(format!("{}{},{:.2}", SUMMARY_PREFIX, summary.worker, summary.total));
            }
        }
        SummaryStyle::PerWorkerDate => {
            lines.push(format!("{}Worker Name - Date,Hours", SUMMARY_PREFIX));
            for summary in &workers {
                for (date, hours) in &summary.per_date {
                    lines.push(format!("{}{} - {},{:.2}", SUMMARY_PREFIX, summary.worker, date, hours));
                }
            }
        }
    }

    lines.push(format!("{}{},{:.2}", SUMMARY_PREFIX, TOTAL_LABEL, total_hours(&counted)));
    lines
}

/// Serializes rows in canonical column order, followed by a blank line and a
/// freshly computed summary block. No trailing newline.
pub fn serialize(rows: &[TimesheetRow], style: SummaryStyle) -> String {
    let mut lines = vec![HEADER.to_string()];
    lines.extend(rows.iter().map(|row| row.cells().join(",")));
    lines.push(String::new());
    lines.extend(summary_lines(rows, style));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_map_is_case_insensitive_and_positional() {
        let cells: Vec<String> = ["HOURS", "worker name", "Date"].iter().map(|s| s.to_string()).collect();
        let map = ColumnMap::from_cells(&cells);
        assert_eq!(map.position(TimesheetField::Hours), Some(0));
        assert_eq!(map.position(TimesheetField::Worker), Some(1));
        assert_eq!(map.position(TimesheetField::Date), Some(2));
        assert_eq!(map.position(TimesheetField::Start), None);
    }

    #[test]
    fn strip_model_noise_drops_fences() {
        let raw = "```csv\nDate,Job Site,Worker Name,Start,End,Hours\n```";
        assert_eq!(strip_model_noise(raw), "Date,Job Site,Worker Name,Start,End,Hours");
    }
}
