use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::api::{CsvGenerator, OpenAi, ReportWriter, Transcriber};
use crate::libs::error::TimesheetError;
use crate::libs::messages::Message;
use crate::libs::pipeline::{BuiltTimesheet, TimesheetPipeline};
use crate::libs::report::ReportMode;
use crate::libs::session::TimesheetSession;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

const DEFAULT_AUDIO_EXT: &str = ".webm";

#[derive(Debug, Deserialize)]
pub struct TimesheetRequest {
    #[serde(default)]
    pub transcript: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub csv: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub mode: Option<ReportMode>,
}

#[derive(Debug, Deserialize)]
pub struct CsvRequest {
    #[serde(default)]
    pub csv: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub transcript: String,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report: String,
}

fn openai(state: &AppState) -> ApiResult<&OpenAi> {
    state.openai.as_ref().ok_or_else(|| ApiError::internal(Message::OpenAiKeyMissing))
}

/// `recording-<millis><ext>`, the extension taken from the uploaded file
/// name, `.webm` when it has none.
pub fn upload_file_name(original: Option<&str>, millis: i64) -> String {
    let ext = original
        .and_then(|name| Path::new(name).extension())
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_else(|| DEFAULT_AUDIO_EXT.to_string());
    format!("recording-{}{}", millis, ext)
}

async fn save_upload(dir: &Path, original: Option<&str>, bytes: &[u8]) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(upload_file_name(original, chrono::Utc::now().timestamp_millis()));
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn whisper(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> ApiResult<Json<TranscriptResponse>> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| ApiError::bad_request(e.body_text()))? {
        if field.name() != Some("audio") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| ApiError::bad_request(e.body_text()))?;
        upload = Some((file_name, bytes));
        break;
    }

    let Some((file_name, bytes)) = upload.filter(|(_, bytes)| !bytes.is_empty()) else {
        return Err(ApiError::bad_request(Message::NoAudioUploaded));
    };
    let client = openai(&state)?;

    let path = save_upload(&state.server.upload_dir, file_name.as_deref(), &bytes)
        .await
        .map_err(|e| ApiError::internal(Message::UploadSaveFailed(e.to_string())))?;
    debug!(path = %path.display(), bytes = bytes.len(), "audio upload stored");

    let result = client.transcribe(&path).await;
    if tokio::fs::remove_file(&path).await.is_err() {
        warn!("{}", Message::UploadCleanupFailed(path.display().to_string()));
    }

    let transcript = result.map_err(ApiError::internal)?;
    Ok(Json(TranscriptResponse { transcript }))
}

pub async fn timesheet(State(state): State<Arc<AppState>>, Json(request): Json<TimesheetRequest>) -> ApiResult<Json<BuiltTimesheet>> {
    let transcript = request.transcript.trim();
    if transcript.is_empty() {
        return Err(ApiError::bad_request(Message::TranscriptRequired));
    }

    let raw = openai(&state)?.generate_csv(transcript).await.map_err(ApiError::internal)?;
    let built = TimesheetPipeline::new(state.report.summary).build(&raw).map_err(ApiError::internal)?;
    Ok(Json(built))
}

pub async fn ai_report(State(state): State<Arc<AppState>>, Json(request): Json<ReportRequest>) -> ApiResult<Json<ReportResponse>> {
    if request.csv.trim().is_empty() && request.notes.trim().is_empty() {
        return Err(ApiError::bad_request(Message::CsvOrNotesRequired));
    }

    let report = openai(&state)?
        .write_report(&request.csv, &request.notes)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(ReportResponse { report }))
}

fn load_session(state: &AppState, csv: &str) -> ApiResult<TimesheetSession> {
    if csv.trim().is_empty() {
        return Err(ApiError::bad_request(Message::CsvRequired));
    }
    let mut session = TimesheetSession::new(state.report.summary);
    session.load_csv(csv).map_err(ApiError::bad_request)?;
    Ok(session)
}

pub async fn local_report(State(state): State<Arc<AppState>>, Json(request): Json<ReportRequest>) -> ApiResult<Json<ReportResponse>> {
    let session = load_session(&state, &request.csv)?;
    let mode = request.mode.unwrap_or(state.report.mode);
    Ok(Json(ReportResponse {
        report: session.report(&request.notes, mode),
    }))
}

pub async fn download_csv(State(state): State<Arc<AppState>>, Json(request): Json<CsvRequest>) -> ApiResult<Response> {
    let mut session = load_session(&state, &request.csv)?;
    let csv = session.to_csv().map_err(|e| match e {
        TimesheetError::NoRows => ApiError::bad_request(e),
        other => ApiError::internal(other),
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"timesheet.csv\""),
        ],
        csv,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_name_keeps_extension() {
        assert_eq!(upload_file_name(Some("memo.m4a"), 42), "recording-42.m4a");
        assert_eq!(upload_file_name(Some("blob"), 42), "recording-42.webm");
        assert_eq!(upload_file_name(None, 7), "recording-7.webm");
    }
}
