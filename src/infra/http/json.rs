use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::core::error::{LoginError, SessionError};

/// Body returned by a successful upsert.
#[derive(Debug, Serialize)]
pub struct UpsertAck<'a> {
    pub status: &'static str,
    pub code: &'a str,
}

pub fn upsert_ok(code: &str) -> Response {
    Json(UpsertAck { status: "ok", code }).into_response()
}

/// Success with no body, as used by delete and preflight.
pub fn empty_ok() -> Response {
    StatusCode::OK.into_response()
}

/// Login replies always carry `success`; `message` only when there is something to say.
#[derive(Debug, Serialize)]
pub struct LoginReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginReply {
    pub fn accepted() -> Self {
        Self { success: true, message: None }
    }

    pub fn created() -> Self {
        Self {
            success: true,
            message: Some("Account Created".into()),
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let status = match &self {
            SessionError::MissingCode => StatusCode::BAD_REQUEST,
            SessionError::NotFound(_) => StatusCode::NOT_FOUND,
            SessionError::NotAnObject | SessionError::Payload(_) | SessionError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "session request failed");
        } else if self.is_client_error() {
            tracing::warn!(error = %self, "session request rejected");
        } else {
            tracing::debug!(error = %self, "session request miss");
        }
        status.into_response()
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        match self {
            LoginError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(LoginReply {
                    success: false,
                    message: Some(self.to_string()),
                }),
            )
                .into_response(),
        }
    }
}
