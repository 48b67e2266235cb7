use super::load_session;
use crate::{
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Timesheet CSV file
    csv: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; defaults to `timesheet.<ext>` in the working directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let summary = Config::read()?.report_settings().summary;
    let session = load_session(&args.csv, summary)?;

    let path = Exporter::new(args.format, args.output)
        .with_summary_style(summary)
        .export(session.rows())
        .map_err(|e| msg_error_anyhow!(Message::ExportFailed(e.to_string())))?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
