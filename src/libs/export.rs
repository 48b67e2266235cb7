//! File export of a timesheet.
//!
//! Supported formats:
//!
//! - **CSV**: the canonical timesheet text, identical to what the server
//!   offers as `timesheet.csv`.
//! - **JSON**: rows, per-worker summaries and the overall total, for other
//!   tools to consume.
//! - **Excel**: one worksheet with a formatted header, the rows with numeric
//!   hours, and a summary block underneath.
//!
//! Without an explicit output path the file is written to the working
//! directory as `timesheet.<ext>`.

use crate::libs::aggregate::{summarize_by_worker, total_hours};
use crate::libs::codec::{self, SummaryStyle, TOTAL_LABEL};
use crate::libs::row::{TimesheetField, TimesheetRow};
use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportTimesheet {
    pub rows: Vec<TimesheetRow>,
    pub workers: Vec<ExportWorker>,
    pub total_hours: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportWorker {
    pub worker: String,
    pub total_hours: f64,
    pub dates: Vec<ExportDateHours>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportDateHours {
    pub date: String,
    pub hours: f64,
}

impl ExportTimesheet {
    pub fn from_rows(rows: &[TimesheetRow]) -> Self {
        let workers = summarize_by_worker(rows)
            .into_iter()
            .map(|summary| ExportWorker {
                worker: summary.worker,
                total_hours: summary.total,
                dates: summary.per_date.into_iter().map(|(date, hours)| ExportDateHours { date, hours }).collect(),
            })
            .collect();

        Self {
            rows: rows.to_vec(),
            workers,
            total_hours: total_hours(rows),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
    summary_style: SummaryStyle,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("timesheet.{}", format.extension())));
        Self {
            format,
            output_path,
            summary_style: SummaryStyle::default(),
        }
    }

    /// Summary block used by the CSV format.
    pub fn with_summary_style(mut self, summary_style: SummaryStyle) -> Self {
        self.summary_style = summary_style;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `rows` in the configured format and returns the file path.
    pub fn export(&self, rows: &[TimesheetRow]) -> Result<PathBuf> {
        match self.format {
            ExportFormat::Csv => self.export_csv(rows)?,
            ExportFormat::Json => self.export_json(rows)?,
            ExportFormat::Excel => self.export_excel(rows)?,
        }
        debug!(path = %self.output_path.display(), format = ?self.format, rows = rows.len(), "timesheet exported");
        Ok(self.output_path.clone())
    }

    fn export_csv(&self, rows: &[TimesheetRow]) -> Result<()> {
        let text = codec::serialize(rows, self.summary_style);
        let mut file = File::create(&self.output_path)?;
        file.write_all(text.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    fn export_json(&self, rows: &[TimesheetRow]) -> Result<()> {
        let json = serde_json::to_string_pretty(&ExportTimesheet::from_rows(rows))?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, rows: &[TimesheetRow]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Timesheet")?;

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let hours_format = Format::new().set_num_format("0.00");

        for (col, field) in TimesheetField::ALL.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, field.label(), &header_format)?;
        }

        let mut row_idx = 1u32;
        for row in rows {
            worksheet.write_string(row_idx, 0, &row.date)?;
            worksheet.write_string(row_idx, 1, &row.job_site)?;
            worksheet.write_string(row_idx, 2, &row.worker)?;
            worksheet.write_string(row_idx, 3, &row.start)?;
            worksheet.write_string(row_idx, 4, &row.end)?;
            if let Some(hours) = row.hours {
                worksheet.write_number_with_format(row_idx, 5, hours, &hours_format)?;
            }
            row_idx += 1;
        }

        row_idx += 1;
        worksheet.write_string_with_format(row_idx, 0, "SUMMARY", &header_format)?;
        worksheet.write_string_with_format(row_idx, 1, "Worker", &header_format)?;
        worksheet.write_string_with_format(row_idx, 2, "Hours", &header_format)?;
        row_idx += 1;

        for summary in summarize_by_worker(rows) {
            worksheet.write_string(row_idx, 1, &summary.worker)?;
            worksheet.write_number_with_format(row_idx, 2, summary.total, &hours_format)?;
            row_idx += 1;
        }
        worksheet.write_string(row_idx, 1, TOTAL_LABEL)?;
        worksheet.write_number_with_format(row_idx, 2, total_hours(rows), &hours_format)?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
