use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::core::credentials::{LoginAttempt, LoginOutcome};
use crate::core::error::LoginError;
use crate::core::store::UserDirectory;
use crate::infra::http::json::LoginReply;

pub type SharedDirectory = Arc<dyn UserDirectory>;

/// POST /login: registers unseen emails, otherwise checks password and role.
pub async fn login(
    State(users): State<SharedDirectory>,
    Json(attempt): Json<LoginAttempt>,
) -> Result<Json<LoginReply>, LoginError> {
    let outcome = users.login(&attempt);
    tracing::debug!(email = %attempt.email, role = %attempt.role, outcome = ?outcome, "login attempt");
    match outcome {
        LoginOutcome::Created => Ok(Json(LoginReply::created())),
        LoginOutcome::Accepted => Ok(Json(LoginReply::accepted())),
        LoginOutcome::Rejected => {
            tracing::warn!(email = %attempt.email, "login rejected");
            Err(LoginError::InvalidCredentials)
        }
    }
}
