//! Stored plan payloads
//!
//! Plans are persisted either as plain text or as a JSON object. When the
//! coach's reply was not valid structured data it is stored as a text
//! wrapper: `{"format": "text", "content": "..."}`.

use std::borrow::Cow;

use serde_json::Value;

/// Get the text to scan for days and exercises from a stored plan payload
///
/// - A string payload is used as-is.
/// - An object with a non-empty string `content` field yields that field.
/// - Anything else is serialized to compact JSON text.
pub fn extract_plan_text(payload: &Value) -> Cow<'_, str> {
    match payload {
        Value::String(text) => Cow::Borrowed(text.as_str()),
        _ => match wrapped_content(payload) {
            Some(content) => Cow::Borrowed(content),
            None => Cow::Owned(payload.to_string()),
        },
    }
}

/// Render a stored plan payload for reading
///
/// Text wrappers display their content, strings display as-is, and any other
/// value displays as pretty-printed JSON.
pub fn display_plan_text(payload: &Value) -> String {
    if let Value::String(text) = payload {
        return text.clone();
    }

    let is_text_wrapper = payload.get("format").and_then(Value::as_str) == Some("text");
    if is_text_wrapper {
        if let Some(content) = wrapped_content(payload) {
            return content.to_string();
        }
    }

    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
}

fn wrapped_content(payload: &Value) -> Option<&str> {
    payload
        .as_object()?
        .get("content")?
        .as_str()
        .filter(|content| !content.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_payload_used_as_is() {
        let payload = json!("#### **Day 1: Push**");
        assert_eq!(extract_plan_text(&payload), "#### **Day 1: Push**");
    }

    #[test]
    fn test_text_wrapper_yields_content() {
        let payload = json!({"format": "text", "content": "- **Row**: 4x10"});
        assert_eq!(extract_plan_text(&payload), "- **Row**: 4x10");
    }

    #[test]
    fn test_content_without_format_still_used() {
        let payload = json!({"content": "plan body"});
        assert_eq!(extract_plan_text(&payload), "plan body");
    }

    #[test]
    fn test_empty_content_falls_back_to_json() {
        let payload = json!({"content": ""});
        assert_eq!(extract_plan_text(&payload), r#"{"content":""}"#);
    }

    #[test]
    fn test_non_string_content_falls_back_to_json() {
        let payload = json!({"content": 5});
        assert_eq!(extract_plan_text(&payload), r#"{"content":5}"#);
    }

    #[test]
    fn test_array_is_stringified() {
        let payload = json!([1, "two"]);
        assert_eq!(extract_plan_text(&payload), r#"[1,"two"]"#);
    }

    #[test]
    fn test_null_is_stringified() {
        assert_eq!(extract_plan_text(&Value::Null), "null");
    }

    #[test]
    fn test_display_text_wrapper() {
        let payload = json!({"format": "text", "content": "Day 1\nSquat"});
        assert_eq!(display_plan_text(&payload), "Day 1\nSquat");
    }

    #[test]
    fn test_display_structured_plan_is_pretty() {
        let payload = json!({"weeks": 4});
        assert_eq!(display_plan_text(&payload), "{\n  \"weeks\": 4\n}");
    }

    #[test]
    fn test_display_content_without_text_format_is_pretty() {
        let payload = json!({"content": "x"});
        assert_eq!(display_plan_text(&payload), "{\n  \"content\": \"x\"\n}");
    }

    #[test]
    fn test_display_string() {
        assert_eq!(display_plan_text(&json!("plain")), "plain");
    }
}
