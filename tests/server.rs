#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use crewsheet::libs::config::{ReportConfig, ServerConfig};
    use crewsheet::libs::report::ReportMode;
    use crewsheet::server::{build_router, AppState};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    const CSV: &str = "Date,Job Site,Worker Name,Start,End,Hours\n01/02/2024,Expo Hall,Sam,08:00 AM,12:00 PM,4.00";

    fn app() -> Router {
        build_router(AppState::new(None, ServerConfig::default(), ReportConfig::default()))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_timesheet_requires_transcript() {
        let response = app().oneshot(post_json("/api/timesheet", json!({ "transcript": "  " }))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await, json!({ "error": "Transcript required" }));
    }

    #[tokio::test]
    async fn test_timesheet_without_api_key_fails() {
        let response = app()
            .oneshot(post_json("/api/timesheet", json!({ "transcript": "Sam worked 8 to noon" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(read_json(response).await["error"], "OPENAI_API_KEY is not set");
    }

    #[tokio::test]
    async fn test_ai_report_requires_csv_or_notes() {
        let response = app().oneshot(post_json("/api/report", json!({ "csv": "", "notes": " " }))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["error"], "CSV or notes required");
    }

    #[tokio::test]
    async fn test_whisper_requires_audio() {
        let body = "--XBOUNDARY\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--XBOUNDARY--\r\n";
        let request = Request::builder()
            .method("POST")
            .uri("/api/whisper")
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=XBOUNDARY")
            .body(Body::from(body))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["error"], "No audio file uploaded");
    }

    #[tokio::test]
    async fn test_local_report_compact() {
        let response = app()
            .oneshot(post_json("/api/report/local", json!({ "csv": CSV, "notes": "", "mode": "compact" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["report"], "Expo Hall work hrs\n\nSam   8am - 12pm   4hrs");
    }

    #[tokio::test]
    async fn test_local_report_uses_configured_mode() {
        let report = ReportConfig {
            mode: ReportMode::Compact,
            ..ReportConfig::default()
        };
        let app = build_router(AppState::new(None, ServerConfig::default(), report));

        let response = app.oneshot(post_json("/api/report/local", json!({ "csv": CSV }))).await.unwrap();
        assert_eq!(read_json(response).await["report"], "Expo Hall work hrs\n\nSam   8am - 12pm   4hrs");
    }

    #[tokio::test]
    async fn test_local_report_rejects_bad_csv() {
        let response = app()
            .oneshot(post_json("/api/report/local", json!({ "csv": "not a timesheet" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["error"], "No valid CSV header returned");
    }

    #[tokio::test]
    async fn test_csv_download() {
        let response = app().oneshot(post_json("/api/csv", json!({ "csv": CSV }))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"timesheet.csv\""
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("Date,Job Site,Worker Name,Start,End,Hours\n"));
        assert!(text.ends_with("Summary,Sam,4.00\nSummary,Total Hours Overall,4.00"));
    }

    #[tokio::test]
    async fn test_csv_download_requires_csv() {
        let response = app().oneshot(post_json("/api/csv", json!({}))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["error"], "CSV required");
    }
}
