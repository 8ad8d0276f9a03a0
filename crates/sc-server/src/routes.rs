use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path as FsPath;
use tower_http::services::{ServeDir, ServeFile};

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn save_routes() -> Router<AppState> {
    Router::new()
        .route("/api/upload", post(upload))
        .route("/api/save", post(save))
        .route("/api/download/{id}", get(download))
}

/// `/` serves the editor page, `/static/*` its assets.
pub fn static_routes(dir: &FsPath) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(dir.join("index.html")))
        .nest_service("/static", ServeDir::new(dir))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub id: String,
}

/// Characters allowed unescaped in an RFC 5987 `filename*` value.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// First `filename` in the query string; later repeats are ignored.
pub fn requested_filename(query: &[(String, String)]) -> Option<&str> {
    query
        .iter()
        .find(|(key, _)| key == "filename")
        .map(|(_, value)| value.as_str())
}

/// `Content-Disposition` value for a sanitized name. Non-ASCII names get an
/// ASCII fallback plus a UTF-8 `filename*` parameter.
pub fn content_disposition(filename: &str) -> String {
    if filename.is_ascii() {
        return format!("attachment; filename=\"{filename}\"");
    }
    let fallback: String = filename
        .chars()
        .map(|c| if c.is_ascii() { c } else { '_' })
        .collect();
    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        utf8_percent_encode(filename, ATTR_CHAR)
    )
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "saves": state.store().len(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "started_at": state.started_at.to_rfc3339(),
    }))
}

async fn upload(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let body = body?;
    let pretty = state.pipeline.inspect(&body)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], pretty).into_response())
}

async fn save(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let body = body?;
    let handle = state.pipeline.persist(&body)?;
    Ok(Json(SaveResponse { id: handle.into_string() }))
}

async fn download(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id?;
    let Query(query) = query?;
    let download = state.pipeline.retrieve(&id, requested_filename(&query))?;
    let disposition = HeaderValue::from_str(&content_disposition(&download.filename))
        .map_err(|e| ApiError::internal(format!("invalid download filename: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/plain")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        download.payload,
    )
        .into_response())
}
