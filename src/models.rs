use serde_json::{Value as JsonValue, json};

/// Schema-less highscore payload; stored and returned as-is
pub type HighscoreRecord = JsonValue;

/// Key used by the routes that take no name
pub const DEFAULT_KEY: &str = "key";

/// Key the example route writes to
pub const EXAMPLE_KEY: &str = "test key";

/// Fixed record written by the example route
pub fn example_record() -> HighscoreRecord {
    json!({ "text": "this is some random data" })
}

/// Decode a request body without ever rejecting it.
///
/// Empty bodies become `null`, valid JSON is kept as parsed, and anything
/// else is stored as a JSON string of the (lossily decoded) body.
pub fn record_from_body(body: &[u8]) -> HighscoreRecord {
    if body.iter().all(u8::is_ascii_whitespace) {
        return JsonValue::Null;
    }

    serde_json::from_slice(body)
        .unwrap_or_else(|_| JsonValue::String(String::from_utf8_lossy(body).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_null() {
        assert_eq!(record_from_body(b""), JsonValue::Null);
        assert_eq!(record_from_body(b"  \n"), JsonValue::Null);
    }

    #[test]
    fn test_json_body_is_parsed() {
        assert_eq!(record_from_body(br#"{"score": 42}"#), json!({"score": 42}));
        assert_eq!(record_from_body(b"[1, 2, 3]"), json!([1, 2, 3]));
        assert_eq!(record_from_body(b"17"), json!(17));
    }

    #[test]
    fn test_non_json_body_is_kept_as_text() {
        assert_eq!(record_from_body(b"{invalid json}"), json!("{invalid json}"));
        assert_eq!(record_from_body(b"alice=42"), json!("alice=42"));
    }

    #[test]
    fn test_example_record_literal() {
        assert_eq!(
            serde_json::to_string(&example_record()).unwrap(),
            r#"{"text":"this is some random data"}"#
        );
    }
}
