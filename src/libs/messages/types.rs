/// Every user-facing text crewsheet prints or returns.
///
/// Variants carry the dynamic parts; the wording lives in the `Display`
/// implementation next door.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleOpenAi,
    ConfigModuleServer,
    ConfigModuleReport,

    // === PROMPTS ===
    PromptSelectModules,
    PromptOpenAiApiUrl,
    PromptOpenAiModel,
    PromptTranscribeModel,
    PromptServerHost,
    PromptServerPort,
    PromptStaticDir,
    PromptUploadDir,
    PromptReportMode,
    PromptSummaryStyle,

    // === COLLABORATOR MESSAGES ===
    OpenAiKeyMissing,
    TranscribingAudio(String), // file name
    GeneratingTimesheet(String), // model
    EmptyTranscript,
    EmptyModelResponse,
    EmptyReport,
    AiCallFailed(String),         // details
    TranscriptionFailed(String),  // details

    // === TIMESHEET MESSAGES ===
    TranscriptInputRequired,
    TranscriptHeader,
    NoWorkerRows,
    TimesheetWritten(usize, String), // rows, path
    RowsHeader,
    SummaryHeader,
    CellUpdated(usize, String, String), // row, field, value
    RowNumberInvalid(usize),
    FileReadFailed(String, String), // path, error

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportFailed(String),

    // === SERVER MESSAGES ===
    ServerListening(String), // address
    ServingStatic(String),   // directory
    NoAudioUploaded,
    TranscriptRequired,
    CsvOrNotesRequired,
    CsvRequired,
    UploadSaveFailed(String),
    UploadCleanupFailed(String),
}
