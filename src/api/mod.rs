//! Clients for the external collaborators.
//!
//! The timesheet core never talks to the network. Speech-to-text, CSV
//! generation from a transcript, and the AI-written report are delegated to
//! collaborators described by the traits below. [`OpenAi`] implements all
//! three against the OpenAI HTTP API.
//!
//! Calls are single attempts: a failure is returned to the caller as is and
//! leaves whatever state the caller holds untouched.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crewsheet::api::{CsvGenerator, OpenAi};
//! use crewsheet::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = OpenAi::from_env(Config::read()?.openai_settings())?;
//! let csv = client.generate_csv("Sam worked the Expo Hall from 8 to noon today").await?;
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use std::path::Path;

pub mod openai;
pub mod prompts;

pub use openai::OpenAi;

/// Speech-to-text.
#[allow(async_fn_in_trait)]
pub trait Transcriber {
    /// Transcribes the audio file at `path`. The returned text is trimmed and
    /// never empty.
    async fn transcribe(&self, path: &Path) -> Result<String>;
}

/// Transcript to raw timesheet CSV.
#[allow(async_fn_in_trait)]
pub trait CsvGenerator {
    /// Returns the model output as is; cleanup and parsing are up to the
    /// caller.
    async fn generate_csv(&self, transcript: &str) -> Result<String>;
}

/// Timesheet CSV and notes to a prose summary.
#[allow(async_fn_in_trait)]
pub trait ReportWriter {
    async fn write_report(&self, csv: &str, notes: &str) -> Result<String>;
}
