use thiserror::Error;

/// Failures of the session store API, mapped to bare status codes at the HTTP boundary.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session payload has no code")]
    MissingCode,
    #[error("session not found: {0}")]
    NotFound(String),
    #[error("session payload is not a JSON object")]
    NotAnObject,
    #[error("malformed session payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("session store io: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Whether the caller sent something we refuse to store.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SessionError::MissingCode)
    }
}

/// Failures of the login endpoint.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_displays_message() {
        let e = SessionError::NotFound("ABC123".into());
        assert_eq!(e.to_string(), "session not found: ABC123");
        assert_eq!(LoginError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn it_converts_from_io_and_json() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        assert!(matches!(SessionError::from(io), SessionError::Io(_)));
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(SessionError::from(bad), SessionError::Payload(_)));
    }

    #[test]
    fn only_missing_code_is_a_client_error() {
        assert!(SessionError::MissingCode.is_client_error());
        assert!(!SessionError::NotFound("x".into()).is_client_error());
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!SessionError::from(bad).is_client_error());
    }
}
