//! # Crewsheet - crew timesheets from spoken work logs
//!
//! Turns a freeform work log into a sorted, normalized timesheet, a canonical
//! CSV file, and a plain-text report.
//!
//! ## Features
//!
//! - **Timesheet core**: time and date normalization, quarter-hour rounding,
//!   grouping by date and worker, CSV round trip
//! - **Reports**: detailed and compact plain-text layouts
//! - **Collaborators**: OpenAI speech-to-text and CSV generation
//! - **Server**: HTTP endpoints for a browser front end
//! - **Data Export**: CSV, JSON and Excel files
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crewsheet::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
pub mod server;
