use async_trait::async_trait;
use serde_json::Value;

use crate::core::credentials::{LoginAttempt, LoginOutcome};
use crate::core::error::SessionError;
use crate::core::session::{SessionRecord, Sessions};

/// Persistence behind the session API.
///
/// Implementations load the store on every call; nothing is cached between requests.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Every stored record. Never fails: an unreadable store is empty.
    async fn list(&self) -> Sessions;

    /// The record filed under `code`. Empty records (`{}`, `null`) count as missing.
    async fn get(&self, code: &str) -> Option<Value>;

    /// Insert or overwrite the record under its code.
    async fn upsert(&self, record: SessionRecord) -> Result<String, SessionError>;

    /// Remove the record under `code`. Returns `false` if there was none.
    async fn delete(&self, code: &str) -> Result<bool, SessionError>;
}

/// Credential registry behind the login endpoint.
pub trait UserDirectory: Send + Sync {
    /// Register the email if unseen, otherwise compare against what was registered.
    fn login(&self, attempt: &LoginAttempt) -> LoginOutcome;
}
