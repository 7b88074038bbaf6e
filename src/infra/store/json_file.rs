//! Whole-file JSON session store.
//!
//! Each operation reads the entire file, works on the decoded map and, for
//! mutations, writes the entire map back over the file. There is no locking
//! and no atomic replace: two concurrent writers each persist their own full
//! snapshot and the last one to write wins.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::core::error::SessionError;
use crate::core::session::{decode_sessions, is_present, SessionRecord, Sessions};
use crate::core::store::SessionStore;

/// File name used when `SESSIONS_FILE` is not set.
pub const DEFAULT_SESSIONS_FILE: &str = "sessions.json";

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable files load as an empty store.
    async fn load(&self) -> Sessions {
        match tokio::fs::read(&self.path).await {
            Ok(raw) => decode_sessions(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Sessions::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read session file; using empty store");
                Sessions::new()
            }
        }
    }

    async fn save(&self, sessions: &Sessions) -> Result<(), SessionError> {
        let content = serde_json::to_string_pretty(sessions)?;
        tokio::fs::write(&self.path, content).await?;
        tracing::debug!(path = %self.path.display(), count = sessions.len(), "session file written");
        Ok(())
    }
}

#[async_trait]
impl SessionStore for JsonFileStore {
    async fn list(&self) -> Sessions {
        self.load().await
    }

    async fn get(&self, code: &str) -> Option<Value> {
        self.load().await.remove(code).filter(is_present)
    }

    async fn upsert(&self, record: SessionRecord) -> Result<String, SessionError> {
        let (code, body) = record.into_parts();
        let mut sessions = self.load().await;
        sessions.insert(code.clone(), body);
        self.save(&sessions).await?;
        Ok(code)
    }

    async fn delete(&self, code: &str) -> Result<bool, SessionError> {
        let mut sessions = self.load().await;
        if sessions.shift_remove(code).is_none() {
            return Ok(false);
        }
        self.save(&sessions).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn record(v: Value) -> SessionRecord {
        SessionRecord::from_value(v).unwrap()
    }

    #[tokio::test]
    async fn missing_file_is_an_empty_store() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join(DEFAULT_SESSIONS_FILE));
        assert!(store.list().await.is_empty());
        assert!(store.get("ABC123").await.is_none());
        assert!(!store.delete("ABC123").await.unwrap());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn upsert_overwrites_in_place() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("s.json"));
        store.upsert(record(json!({"code":"A","v":1}))).await.unwrap();
        store.upsert(record(json!({"code":"B"}))).await.unwrap();
        let code = store.upsert(record(json!({"code":"A","v":2}))).await.unwrap();
        assert_eq!(code, "A");

        let all = store.list().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all.keys().collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(store.get("A").await.unwrap(), json!({"code":"A","v":2}));
    }

    #[tokio::test]
    async fn empty_stored_record_reads_as_missing_but_still_deletes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("s.json");
        std::fs::write(&path, r#"{"E":{},"N":null,"A":{"code":"A"}}"#).unwrap();
        let store = JsonFileStore::new(&path);
        assert!(store.get("E").await.is_none());
        assert!(store.get("N").await.is_none());
        assert!(store.get("A").await.is_some());
        assert!(store.delete("E").await.unwrap());
        assert_eq!(store.list().await.keys().collect::<Vec<_>>(), ["N", "A"]);
    }

    #[tokio::test]
    async fn delete_keeps_remaining_order() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("s.json"));
        for code in ["A", "B", "C"] {
            store.upsert(record(json!({ "code": code }))).await.unwrap();
        }
        assert!(store.delete("A").await.unwrap());
        assert_eq!(store.list().await.keys().collect::<Vec<_>>(), ["B", "C"]);
    }

    #[tokio::test]
    async fn writes_pretty_printed_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("s.json");
        let store = JsonFileStore::new(&path);
        store.upsert(record(json!({"code":"A"}))).await.unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "{\n  \"A\": {\n    \"code\": \"A\"\n  }\n}");
    }

    #[tokio::test]
    async fn corrupt_file_is_replaced_on_next_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("s.json");
        std::fs::write(&path, "{ definitely not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(store.list().await.is_empty());
        store.upsert(record(json!({"code":"Z"}))).await.unwrap();
        let on_disk: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, json!({"Z":{"code":"Z"}}));
    }

    #[tokio::test]
    async fn write_failure_surfaces_as_io_error() {
        let dir = tempdir().unwrap();
        // The store path is a directory, so the overwrite cannot succeed.
        let store = JsonFileStore::new(dir.path());
        let err = store.upsert(record(json!({"code":"A"}))).await.unwrap_err();
        assert!(matches!(err, SessionError::Io(_)));
    }
}
