//! Transient user-facing notifications.

use std::fmt;

/// Substrings that mark an API failure as rate limiting.
const RATE_LIMIT_MARKERS: [&str; 3] = ["rate limit", "429", "wait"];

/// Category of a notification. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    /// Input problem caught before any request was sent.
    Warning,
    RateLimited,
    GenerationFailed,
}

/// A short-lived message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub(crate) fn success(description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Content generated!".to_string(),
            description: description.into(),
        }
    }

    pub(crate) fn missing_keyword() -> Self {
        Self {
            kind: NotificationKind::Warning,
            title: "Keyword required".to_string(),
            description: "Please enter a keyword".to_string(),
        }
    }

    /// Build the failure notification for an error message.
    #[must_use]
    pub fn failure(message: &str) -> Self {
        if is_rate_limited(message) {
            Self {
                kind: NotificationKind::RateLimited,
                title: "Slow down!".to_string(),
                description: message.to_string(),
            }
        } else {
            Self {
                kind: NotificationKind::GenerationFailed,
                title: "Generation failed".to_string(),
                description: message.to_string(),
            }
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Whether an error message reports rate limiting. Case-sensitive.
#[must_use]
pub fn is_rate_limited(message: &str) -> bool {
    RATE_LIMIT_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}
