//! Core types, repositories, and the generation controller.

pub mod catalog;
pub mod celebration;
pub mod controller;
pub mod history;
pub mod notify;
pub mod stats;
pub mod trending;
pub mod types;

pub use catalog::{ContentType, Length, Tone};
pub use controller::{DisplayedContent, FormState, GenerateOutcome, GenerationController, Phase};
pub use history::{HISTORY_CAP, HISTORY_KEY, HistoryRepository};
pub use notify::{Notification, NotificationKind};
pub use stats::{STATS_KEY, StatsRepository};
pub use types::{GenerationRequest, HistoryEntry, NewHistoryEntry, StatsRecord};
