//! Wire format of the generation API.

use crate::core::types::GenerationRequest;
use crate::error::{Error, Result};
use serde_json::Value;

/// Description used when a failure carries no usable message.
pub const GENERIC_FAILURE: &str = "Failed to generate content";

/// A successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResponse {
    /// The generated text.
    pub content: String,

    /// Parameters echoed back by the API, if it sent a well-formed copy.
    pub metadata: Option<GenerationRequest>,
}

/// Pull the `error` or `message` string out of a failure payload.
#[must_use]
pub fn error_message(payload: &Value) -> Option<String> {
    ["error", "message"]
        .iter()
        .find_map(|field| {
            payload
                .get(field)
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
        })
        .map(str::to_string)
}

/// Interpret the body of a 2xx response.
///
/// # Errors
///
/// Returns [`Error::Remote`] unless the payload reports `success: true` with
/// a string `result`.
pub fn parse_success(status: u16, payload: &Value) -> Result<GenerationResponse> {
    let succeeded = payload.get("success").and_then(Value::as_bool) == Some(true);
    let content = payload.get("result").and_then(Value::as_str);

    match (succeeded, content) {
        (true, Some(content)) => Ok(GenerationResponse {
            content: content.to_string(),
            metadata: payload
                .get("metadata")
                .and_then(|m| serde_json::from_value(m.clone()).ok()),
        }),
        _ => Err(Error::Remote {
            status: Some(status),
            message: error_message(payload).unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{ContentType, Length, Tone};
    use serde_json::json;

    #[test]
    fn success_with_metadata() {
        let payload = json!({
            "success": true,
            "result": "Why did the cat...",
            "metadata": {"type": "joke", "keyword": "cats", "tone": "funny", "length": "short"}
        });
        let response = parse_success(200, &payload).unwrap();
        assert_eq!(response.content, "Why did the cat...");
        assert_eq!(
            response.metadata,
            Some(GenerationRequest {
                content_type: ContentType::Joke,
                keyword: "cats".to_string(),
                tone: Tone::Funny,
                length: Length::Short,
            })
        );
    }

    #[test]
    fn malformed_metadata_is_dropped() {
        let payload = json!({"success": true, "result": "ok", "metadata": {"type": "limerick"}});
        let response = parse_success(200, &payload).unwrap();
        assert!(response.metadata.is_none());
    }

    #[test]
    fn success_false_uses_error_field() {
        let payload = json!({"success": false, "error": "model overloaded"});
        let err = parse_success(200, &payload).unwrap_err();
        assert_eq!(err.to_string(), "model overloaded");
    }

    #[test]
    fn success_false_uses_message_field() {
        let payload = json!({"success": false, "message": "try again"});
        assert_eq!(parse_success(200, &payload).unwrap_err().to_string(), "try again");
    }

    #[test]
    fn success_without_result_is_failure() {
        let payload = json!({"success": true});
        let err = parse_success(200, &payload).unwrap_err();
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn error_field_wins_over_message() {
        let payload = json!({"error": "first", "message": "second"});
        assert_eq!(error_message(&payload).as_deref(), Some("first"));
    }

    #[test]
    fn non_string_error_falls_through() {
        let payload = json!({"error": {"code": 1}, "message": "readable"});
        assert_eq!(error_message(&payload).as_deref(), Some("readable"));
        assert_eq!(error_message(&json!({})), None);
    }
}
