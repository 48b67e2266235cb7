//! Work log to timesheet CSV.
//!
//! The transcript comes from `--text`, `--file` or `--audio`, checked in that
//! order. It is sent to the CSV-generation model, and the model output runs
//! through [`TimesheetPipeline`] before it is written and displayed.

use super::read_text;
use crate::{
    api::{CsvGenerator, OpenAi, Transcriber},
    libs::{config::Config, messages::Message, pipeline::TimesheetPipeline, view::View},
    msg_bail_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Work log text
    #[arg(short, long)]
    text: Option<String>,

    /// File containing the work log
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Audio recording of the work log, transcribed first
    #[arg(short, long)]
    audio: Option<PathBuf>,

    /// Where to write the timesheet CSV
    #[arg(short, long, default_value = "timesheet.csv")]
    output: PathBuf,
}

pub async fn cmd(args: BuildArgs) -> Result<()> {
    let config = Config::read()?;
    let client = OpenAi::from_env(config.openai_settings())?;

    let transcript = if let Some(text) = args.text {
        text
    } else if let Some(path) = &args.file {
        read_text(path)?
    } else if let Some(audio) = &args.audio {
        msg_info!(Message::TranscribingAudio(audio.display().to_string()));
        client.transcribe(audio).await?
    } else {
        msg_bail_anyhow!(Message::TranscriptInputRequired);
    };

    let transcript = transcript.trim();
    if transcript.is_empty() {
        msg_bail_anyhow!(Message::TranscriptRequired);
    }

    msg_info!(Message::GeneratingTimesheet(client.config().model.clone()));
    let raw = client.generate_csv(transcript).await?;
    let built = TimesheetPipeline::new(config.report_settings().summary).build(&raw)?;

    if built.rows.is_empty() {
        msg_warning!(Message::NoWorkerRows);
    } else {
        msg_print!(Message::RowsHeader, true);
        View::print_rows(&built.rows);
        msg_print!(Message::SummaryHeader, true);
        View::print_summary(&built.rows);
    }

    fs::write(&args.output, format!("{}\n", built.csv))?;
    msg_success!(Message::TimesheetWritten(built.rows.len(), args.output.display().to_string()));
    Ok(())
}
