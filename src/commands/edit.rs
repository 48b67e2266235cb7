//! Single-cell edits of a timesheet CSV file.
//!
//! Rows are numbered from 1 in the order `crewsheet show` prints them. The
//! file is rewritten in canonical form with a fresh summary block.

use super::load_session;
use crate::{
    libs::{config::Config, messages::Message, row::TimesheetField},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Timesheet CSV file, rewritten in place
    csv: PathBuf,

    /// Row number as shown by `show`
    #[arg(short, long)]
    row: usize,

    /// Column to change
    #[arg(short, long, value_enum)]
    field: TimesheetField,

    /// New value. Times take HH:MM (24-hour); dates take MM/DD/YYYY or MM/DD.
    #[arg(short, long, allow_hyphen_values = true)]
    value: String,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    if args.row == 0 {
        msg_bail_anyhow!(Message::RowNumberInvalid(args.row));
    }

    let mut session = load_session(&args.csv, Config::read()?.report_settings().summary)?;
    let updated = session.edit_cell(args.row - 1, args.field, &args.value)?.get(args.field);

    let csv = session.to_csv()?;
    fs::write(&args.csv, format!("{}\n", csv))?;

    msg_success!(Message::CellUpdated(args.row, args.field.to_string(), updated));
    Ok(())
}
