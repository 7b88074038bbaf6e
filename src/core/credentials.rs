//! Credentials kept by the login service.

use serde::Deserialize;
use serde_json::Value;

/// What a login request carries. Fields are taken as whatever JSON arrives;
/// an absent field is `null` and simply fails to match later.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginAttempt {
    #[serde(default)]
    pub email: Value,
    #[serde(default)]
    pub password: Value,
    #[serde(default)]
    pub role: Value,
}

impl LoginAttempt {
    /// Key the directory files this attempt under: the compact JSON text of `email`.
    pub fn account_key(&self) -> String {
        self.email.to_string()
    }
}

/// Stored once, on the first attempt for an email, and never overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub password: Value,
    pub role: Value,
}

impl Credential {
    /// Plaintext comparison of both password and role.
    pub fn matches(&self, attempt: &LoginAttempt) -> bool {
        self.password == attempt.password && self.role == attempt.role
    }
}

impl From<&LoginAttempt> for Credential {
    fn from(attempt: &LoginAttempt) -> Self {
        Self {
            password: attempt.password.clone(),
            role: attempt.role.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Created,
    Accepted,
    Rejected,
}
