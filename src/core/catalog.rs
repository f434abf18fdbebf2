//! Closed vocabularies for generation requests.
//!
//! Values travel as kebab-case strings both on the wire and on disk.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// Kind of text to generate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ContentType {
    #[default]
    Shayari,
    Joke,
    Quote,
    Story,
    Riddle,
    PickupLine,
    Roast,
    Compliment,
    DadJoke,
    Haiku,
    RapLyrics,
    TweetThread,
    Acrostic,
    MotivationalSpeech,
}

impl ContentType {
    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Shayari => "Shayari",
            Self::Joke => "Joke",
            Self::Quote => "Quote",
            Self::Story => "Story",
            Self::Riddle => "Riddle",
            Self::PickupLine => "Pickup Line",
            Self::Roast => "Roast",
            Self::Compliment => "Compliment",
            Self::DadJoke => "Dad Joke",
            Self::Haiku => "Haiku",
            Self::RapLyrics => "Rap Lyrics",
            Self::TweetThread => "Tweet Thread",
            Self::Acrostic => "Acrostic",
            Self::MotivationalSpeech => "Motivational Speech",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Shayari => "📜",
            Self::Joke => "😂",
            Self::Quote => "💭",
            Self::Story => "📖",
            Self::Riddle => "🤔",
            Self::PickupLine => "💘",
            Self::Roast => "🔥",
            Self::Compliment => "🌟",
            Self::DadJoke => "👨",
            Self::Haiku => "🎋",
            Self::RapLyrics => "🎤",
            Self::TweetThread => "🐦",
            Self::Acrostic => "✍️",
            Self::MotivationalSpeech => "💪",
        }
    }
}

/// Voice of the generated text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Tone {
    #[default]
    Funny,
    Serious,
    Romantic,
    Motivational,
}

impl Tone {
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Funny => "😄",
            Self::Serious => "🧐",
            Self::Romantic => "💖",
            Self::Motivational => "🚀",
        }
    }
}

/// Requested size of the generated text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
        }
    }
}

/// Parse a catalog value, naming the field in the error.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `value` is not in the vocabulary.
pub fn parse_param<T: FromStr>(field: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidParameter(format!("unknown {field}: {value}")))
}
