use super::load_session;
use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Timesheet CSV file
    csv: PathBuf,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let session = load_session(&args.csv, Config::read()?.report_settings().summary)?;

    if session.is_empty() {
        msg_warning!(Message::NoWorkerRows);
        return Ok(());
    }

    msg_print!(Message::RowsHeader, true);
    View::print_rows(session.rows());
    msg_print!(Message::SummaryHeader, true);
    View::print_summary(session.rows());
    Ok(())
}
