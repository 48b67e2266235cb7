//! HTTP glue around the timesheet core.
//!
//! Routes:
//!
//! | Route                    | Body                      | Response                  |
//! |--------------------------|---------------------------|---------------------------|
//! | `GET  /health`           |                           | `{status}`                |
//! | `POST /api/whisper`      | multipart field `audio`   | `{transcript}`            |
//! | `POST /api/timesheet`    | `{transcript}`            | `{csv, rows}`             |
//! | `POST /api/report`       | `{csv, notes}`            | `{report}` written by AI  |
//! | `POST /api/report/local` | `{csv, notes, mode?}`     | `{report}` built locally  |
//! | `POST /api/csv`          | `{csv}`                   | `timesheet.csv` download  |
//!
//! Failures are JSON `{"error": "..."}` with status 400 for bad input and 500
//! for collaborator or processing failures. Each request builds its own
//! session; nothing is kept between requests.

use crate::api::OpenAi;
use crate::libs::config::{ReportConfig, ServerConfig};
use crate::libs::messages::Message;
use crate::{msg_info, msg_warning};
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod error;
pub mod handlers;

/// Upper bound for uploaded audio, matching the transcription service limit.
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// `None` when no API key is configured; AI routes then fail with 500.
    pub openai: Option<OpenAi>,
    pub server: ServerConfig,
    pub report: ReportConfig,
}

impl AppState {
    pub fn new(openai: Option<OpenAi>, server: ServerConfig, report: ReportConfig) -> Self {
        Self { openai, server, report }
    }
}

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.server.static_dir.clone();

    let router = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/whisper", post(handlers::whisper))
        .route("/api/timesheet", post(handlers::timesheet))
        .route("/api/report", post(handlers::ai_report))
        .route("/api/report/local", post(handlers::local_report))
        .route("/api/csv", post(handlers::download_csv))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(Arc::new(state));

    let router = match static_dir {
        Some(dir) => {
            msg_info!(Message::ServingStatic(dir.display().to_string()));
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive())
}

/// Binds the configured address and serves until the process stops.
pub async fn run(state: AppState) -> Result<()> {
    if state.openai.is_none() {
        msg_warning!(Message::OpenAiKeyMissing);
    }

    let addr = format!("{}:{}", state.server.host, state.server.port);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "http server bound");
    msg_info!(Message::ServerListening(addr));

    axum::serve(listener, app).await?;
    Ok(())
}
