use axum::body::Bytes;
use axum::extract::State;
use axum::http::Uri;
use axum::response::Response;
use axum::Json;
use percent_encoding::percent_decode_str;
use serde_json::Value;
use std::sync::Arc;

use crate::core::error::SessionError;
use crate::core::session::{SessionRecord, Sessions};
use crate::core::store::SessionStore;
use crate::infra::http::json as http_json;

pub type SharedStore = Arc<dyn SessionStore>;

/// Last path segment, trailing slashes ignored, percent-decoded with invalid
/// UTF-8 replaced rather than rejected.
fn code_from_uri(uri: &Uri) -> String {
    let segment = uri
        .path()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

// GET /api/sessions
pub async fn list(State(store): State<SharedStore>) -> Json<Sessions> {
    let sessions = store.list().await;
    tracing::debug!(count = sessions.len(), "list sessions");
    Json(sessions)
}

// GET /api/sessions/:code
pub async fn get_one(
    State(store): State<SharedStore>,
    uri: Uri,
) -> Result<Json<Value>, SessionError> {
    let code = code_from_uri(&uri);
    match store.get(&code).await {
        Some(record) => Ok(Json(record)),
        None => Err(SessionError::NotFound(code)),
    }
}

// POST /api/sessions
pub async fn upsert(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<Response, SessionError> {
    let record = SessionRecord::from_body(&body)?;
    let code = store.upsert(record).await?;
    tracing::info!(code = %code, "session saved");
    Ok(http_json::upsert_ok(&code))
}

// DELETE /api/sessions/:code
pub async fn delete(
    State(store): State<SharedStore>,
    uri: Uri,
) -> Result<Response, SessionError> {
    let code = code_from_uri(&uri);
    if store.delete(&code).await? {
        tracing::info!(code = %code, "session deleted");
        Ok(http_json::empty_ok())
    } else {
        Err(SessionError::NotFound(code))
    }
}
