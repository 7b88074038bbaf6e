//! Session records: opaque JSON objects keyed by their `code`.

use serde_json::{Map, Value};

use crate::core::error::SessionError;

/// The whole store, code -> record, kept in insertion order.
pub type Sessions = Map<String, Value>;

/// A client-supplied record together with the code it is filed under.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    code: String,
    body: Value,
}

impl SessionRecord {
    /// Parse a raw request body. An empty body is treated as `{}`.
    pub fn from_body(bytes: &[u8]) -> Result<Self, SessionError> {
        if bytes.is_empty() {
            return Self::from_value(Value::Object(Map::new()));
        }
        let body: Value = serde_json::from_slice(bytes)?;
        Self::from_value(body)
    }

    /// Accepts any JSON object with a non-empty string `code`.
    pub fn from_value(body: Value) -> Result<Self, SessionError> {
        let Value::Object(fields) = &body else {
            return Err(SessionError::NotAnObject);
        };
        let code = match fields.get("code") {
            Some(Value::String(code)) if !code.is_empty() => code.clone(),
            _ => return Err(SessionError::MissingCode),
        };
        Ok(Self { code, body })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn into_parts(self) -> (String, Value) {
        (self.code, self.body)
    }
}

/// Decode a persisted store document. Anything that is not a JSON object is an empty store.
pub fn decode_sessions(raw: &[u8]) -> Sessions {
    match serde_json::from_slice::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            tracing::warn!(kind = json_kind(&other), "session file is not an object; using empty store");
            Sessions::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "session file is not valid JSON; using empty store");
            Sessions::new()
        }
    }
}

/// Whether a stored record counts as present. Empty and zero-like values
/// (`null`, `false`, `0`, `""`, `[]`, `{}`) are treated as missing.
pub fn is_present(record: &Value) -> bool {
    match record {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_object_with_code_and_keeps_body_verbatim() {
        let rec = SessionRecord::from_body(br#"{"code":"ABC123","foo":1}"#).unwrap();
        assert_eq!(rec.code(), "ABC123");
        let (code, body) = rec.into_parts();
        assert_eq!(code, "ABC123");
        assert_eq!(body, json!({"code":"ABC123","foo":1}));
    }

    #[test]
    fn empty_body_is_missing_code() {
        let err = SessionRecord::from_body(b"").unwrap_err();
        assert!(matches!(err, SessionError::MissingCode));
    }

    #[test]
    fn rejects_empty_or_non_string_code() {
        for body in [json!({"foo":1}), json!({"code":""}), json!({"code":null}), json!({"code":7})] {
            let err = SessionRecord::from_value(body).unwrap_err();
            assert!(matches!(err, SessionError::MissingCode));
        }
    }

    #[test]
    fn malformed_and_non_object_bodies_are_not_client_errors() {
        let err = SessionRecord::from_body(b"{ not-json }").unwrap_err();
        assert!(matches!(err, SessionError::Payload(_)));
        let err = SessionRecord::from_body(br#"["code"]"#).unwrap_err();
        assert!(matches!(err, SessionError::NotAnObject));
    }

    #[test]
    fn empty_records_are_not_present() {
        for v in [json!(null), json!({}), json!([]), json!(""), json!(0), json!(false)] {
            assert!(!is_present(&v), "{v} should not count as present");
        }
        assert!(is_present(&json!({"code":"A"})));
        assert!(is_present(&json!(1)));
    }

    #[test]
    fn decode_falls_back_to_empty_store() {
        assert!(decode_sessions(b"").is_empty());
        assert!(decode_sessions(b"{oops").is_empty());
        assert!(decode_sessions(b"[1,2]").is_empty());
        let map = decode_sessions(br#"{"B":{"code":"B"},"A":{"code":"A"}}"#);
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["B", "A"]);
    }
}
