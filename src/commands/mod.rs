//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a `cmd`
//! entry point.

pub mod build;
pub mod edit;
pub mod export;
pub mod init;
pub mod report;
pub mod serve;
pub mod show;
pub mod transcribe;

use crate::libs::codec::SummaryStyle;
use crate::libs::messages::Message;
use crate::libs::session::TimesheetSession;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Transcribe an audio recording")]
    Transcribe(transcribe::TranscribeArgs),
    #[command(about = "Build a timesheet CSV from a work log")]
    Build(build::BuildArgs),
    #[command(about = "Show the rows and totals of a timesheet CSV")]
    Show(show::ShowArgs),
    #[command(about = "Edit one cell of a timesheet CSV")]
    Edit(edit::EditArgs),
    #[command(about = "Prepare a report")]
    Report(report::ReportArgs),
    #[command(about = "Export a timesheet to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[command(about = "Run the HTTP server")]
    Serve(serve::ServeArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Transcribe(args) => transcribe::cmd(args).await,
            Commands::Build(args) => build::cmd(args).await,
            Commands::Show(args) => show::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Report(args) => report::cmd(args).await,
            Commands::Export(args) => export::cmd(args),
            Commands::Serve(args) => serve::cmd(args).await,
        }
    }
}

pub(crate) fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| msg_error_anyhow!(Message::FileReadFailed(path.display().to_string(), e.to_string())))
}

/// Loads a timesheet CSV file into a fresh session.
pub(crate) fn load_session(path: &Path, summary_style: SummaryStyle) -> Result<TimesheetSession> {
    let text = read_text(path)?;
    let mut session = TimesheetSession::new(summary_style);
    let count = session.load_csv(&text)?;
    msg_debug!(format!("{} rows loaded from {}", count, path.display()));
    Ok(session)
}
