//! Request, history, and stats record types.

use crate::core::catalog::{ContentType, Length, Tone};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameters of one generation request.
///
/// Also the shape of the `metadata` object echoed back by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Kind of text to generate.
    #[serde(rename = "type")]
    pub content_type: ContentType,

    /// Free-text topic, trimmed before sending.
    pub keyword: String,

    pub tone: Tone,

    pub length: Length,
}

/// One durable record of a past generation and its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique id, milliseconds since the Unix epoch at creation.
    pub id: i64,

    #[serde(rename = "type")]
    pub content_type: ContentType,

    pub keyword: String,

    pub tone: Tone,

    pub length: Length,

    /// The generated text.
    pub content: String,

    /// When the entry was created.
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// The request that produced this entry.
    #[must_use]
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            content_type: self.content_type,
            keyword: self.keyword.clone(),
            tone: self.tone,
            length: self.length,
        }
    }
}

/// A history entry before `id` and `timestamp` are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    pub request: GenerationRequest,
    pub content: String,
}

/// Running usage counters, one per store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsRecord {
    /// Successful generations so far.
    pub total_generations: u64,

    /// Kept for compatibility with existing stores; nothing updates it.
    pub streak: u32,

    /// Time of the most recent successful generation.
    pub last_visit: Option<DateTime<Utc>>,

    /// Type of the most recent successful generation (not the most frequent).
    pub favorite_type: Option<ContentType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_type_key() {
        let request = GenerationRequest {
            content_type: ContentType::Joke,
            keyword: "cats".to_string(),
            tone: Tone::Funny,
            length: Length::Short,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "joke",
                "keyword": "cats",
                "tone": "funny",
                "length": "short"
            })
        );
    }

    #[test]
    fn default_stats_shape() {
        let json = serde_json::to_value(StatsRecord::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "totalGenerations": 0,
                "streak": 0,
                "lastVisit": null,
                "favoriteType": null
            })
        );
    }

    #[test]
    fn history_entry_parses_stored_shape() {
        let raw = r#"{
            "id": 1700000000000,
            "type": "dad-joke",
            "keyword": "coffee",
            "tone": "funny",
            "length": "medium",
            "content": "I like my coffee like my jokes.",
            "timestamp": "2024-01-01T12:00:00Z"
        }"#;
        let entry: HistoryEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.id, 1_700_000_000_000);
        assert_eq!(entry.content_type, ContentType::DadJoke);
        assert_eq!(entry.request().keyword, "coffee");
    }

    #[test]
    fn history_entry_missing_field_is_rejected() {
        let raw = r#"{"id": 1, "type": "joke", "keyword": "x"}"#;
        assert!(serde_json::from_str::<HistoryEntry>(raw).is_err());
    }
}
