use super::{load_session, read_text};
use crate::{
    api::{OpenAi, ReportWriter},
    libs::{config::Config, report::ReportMode},
    msg_print,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Timesheet CSV file
    csv: PathBuf,

    /// Free-text notes appended to the report
    #[arg(short, long)]
    notes: Option<String>,

    /// Read the notes from a file
    #[arg(long, conflicts_with = "notes")]
    notes_file: Option<PathBuf>,

    /// Report layout; defaults to the configured one
    #[arg(short, long, value_enum)]
    mode: Option<ReportMode>,

    /// Have the language model write the report instead
    #[arg(long)]
    ai: bool,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let settings = config.report_settings();
    let mut session = load_session(&args.csv, settings.summary)?;

    let notes = match (&args.notes, &args.notes_file) {
        (Some(notes), _) => notes.clone(),
        (None, Some(path)) => read_text(path)?,
        (None, None) => String::new(),
    };

    let report = if args.ai {
        let client = OpenAi::from_env(config.openai_settings())?;
        let csv = session.to_csv()?;
        client.write_report(&csv, &notes).await?
    } else {
        session.report(&notes, args.mode.unwrap_or(settings.mode))
    };

    msg_print!(report);
    Ok(())
}
