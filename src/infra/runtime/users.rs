use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::core::credentials::{Credential, LoginAttempt, LoginOutcome};
use crate::core::store::UserDirectory;

/// Process-wide credential map, keyed by the JSON text of the email. A
/// request without an email is filed under `null` like any other.
#[derive(Default, Clone)]
pub struct InMemoryUserDirectory(Arc<RwLock<HashMap<String, Credential>>>);

impl UserDirectory for InMemoryUserDirectory {
    fn login(&self, attempt: &LoginAttempt) -> LoginOutcome {
        // Recover the map even if another handler panicked while holding the lock.
        let mut users = self.0.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        let key = attempt.account_key();
        match users.get(&key) {
            Some(existing) if existing.matches(attempt) => LoginOutcome::Accepted,
            Some(_) => LoginOutcome::Rejected,
            None => {
                users.insert(key, Credential::from(attempt));
                LoginOutcome::Created
            }
        }
    }
}
