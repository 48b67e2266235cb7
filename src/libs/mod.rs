//! Core library modules for crewsheet.
//!
//! The timesheet core is pure and synchronous:
//! [`time`] and [`date`] normalize tokens, [`row`] models one shift,
//! [`codec`] reads and writes the CSV text, [`aggregate`] groups and totals,
//! [`report`] renders prose. [`session`] and [`pipeline`] tie them together
//! for the CLI and the server.
//!
//! ## Usage
//!
//! ```rust
//! use crewsheet::libs::codec::SummaryStyle;
//! use crewsheet::libs::pipeline::TimesheetPipeline;
//! use crewsheet::libs::report::{build_report, ReportMode};
//!
//! let raw = "```csv\nDate,Job Site,Worker Name,Start,End,Hours\n01/02/2024,Expo Hall,Sam,8:00 am,12:00 pm,\n```";
//! let built = TimesheetPipeline::new(SummaryStyle::PerWorker).build(raw)?;
//! assert!(built.csv.ends_with("Summary,Total Hours Overall,4.00"));
//!
//! let report = build_report(&built.rows, "", ReportMode::Compact);
//! assert!(report.contains("Sam   8am - 12pm   4hrs"));
//! # Ok::<(), crewsheet::libs::error::TimesheetError>(())
//! ```

pub mod aggregate;
pub mod codec;
pub mod config;
pub mod data_storage;
pub mod date;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod pipeline;
pub mod report;
pub mod row;
pub mod session;
pub mod sort_key;
pub mod time;
pub mod view;
