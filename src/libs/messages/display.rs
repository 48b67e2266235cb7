//! Display text for [`Message`].
//!
//! All wording sits in one match so the CLI, the server and the logs agree
//! on what a failure is called. Several server-side texts are part of the
//! HTTP contract (`{"error": "Transcript required"}`) and must not drift.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNotFound => "No configuration file found".to_string(),
            Message::ConfigModuleOpenAi => "OpenAI settings".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptOpenAiApiUrl => "OpenAI API URL".to_string(),
            Message::PromptOpenAiModel => "Chat model".to_string(),
            Message::PromptTranscribeModel => "Transcription model".to_string(),
            Message::PromptServerHost => "Listen address".to_string(),
            Message::PromptServerPort => "Port".to_string(),
            Message::PromptStaticDir => "Static files directory (empty for none)".to_string(),
            Message::PromptUploadDir => "Upload directory".to_string(),
            Message::PromptReportMode => "Report layout".to_string(),
            Message::PromptSummaryStyle => "CSV summary style".to_string(),

            // === COLLABORATOR MESSAGES ===
            Message::OpenAiKeyMissing => "OPENAI_API_KEY is not set".to_string(),
            Message::TranscribingAudio(name) => format!("Transcribing {}...", name),
            Message::GeneratingTimesheet(model) => format!("Generating timesheet with {}...", model),
            Message::EmptyTranscript => "Empty transcript from Whisper".to_string(),
            Message::EmptyModelResponse => "Empty response from OpenAI".to_string(),
            Message::EmptyReport => "Empty report from AI".to_string(),
            Message::AiCallFailed(details) => format!("AI call failed: {}", details),
            Message::TranscriptionFailed(details) => format!("Transcription failed: {}", details),

            // === TIMESHEET MESSAGES ===
            Message::TranscriptInputRequired => "Provide a transcript with --text, --file or --audio".to_string(),
            Message::TranscriptHeader => "Transcript:".to_string(),
            Message::NoWorkerRows => "No worker rows found. Try dictating again.".to_string(),
            Message::TimesheetWritten(rows, path) => format!("Timesheet with {} row(s) written to {}", rows, path),
            Message::RowsHeader => "Workers & Hours".to_string(),
            Message::SummaryHeader => "Summary".to_string(),
            Message::CellUpdated(row, field, value) => format!("Row {}: {} set to '{}'", row, field, value),
            Message::RowNumberInvalid(row) => format!("Row numbers start at 1, got {}", row),
            Message::FileReadFailed(path, error) => format!("Failed to read {}: {}", path, error),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),
            Message::ExportFailed(error) => format!("Export failed: {}", error),

            // === SERVER MESSAGES ===
            Message::ServerListening(addr) => format!("Server running on {}", addr),
            Message::ServingStatic(dir) => format!("Serving static files from {}", dir),
            Message::NoAudioUploaded => "No audio file uploaded".to_string(),
            Message::TranscriptRequired => "Transcript required".to_string(),
            Message::CsvOrNotesRequired => "CSV or notes required".to_string(),
            Message::CsvRequired => "CSV required".to_string(),
            Message::UploadSaveFailed(error) => format!("Failed to store upload: {}", error),
            Message::UploadCleanupFailed(path) => format!("Failed to remove upload {}", path),
        };
        write!(f, "{}", text)
    }
}
