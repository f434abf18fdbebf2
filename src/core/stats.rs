//! Usage statistics.

use crate::core::catalog::ContentType;
use crate::core::types::StatsRecord;
use crate::storage::{KeyValueStore, Persisted};
use chrono::Utc;
use std::sync::Arc;

/// Storage key for the stats record.
pub const STATS_KEY: &str = "userStats";

/// Repository over the persisted stats record.
#[derive(Debug)]
pub struct StatsRepository {
    record: Persisted<StatsRecord>,
}

impl StatsRepository {
    /// Open the stats stored in `store`, or start from zero.
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            record: Persisted::load(store, STATS_KEY, StatsRecord::default()),
        }
    }

    #[must_use]
    pub fn get(&self) -> &StatsRecord {
        self.record.get()
    }

    /// Count one successful generation of `content_type`.
    ///
    /// Every call counts, so calling twice adds two.
    pub fn record_generation(&mut self, content_type: ContentType) {
        self.record.update(|stats| {
            stats.total_generations += 1;
            stats.last_visit = Some(Utc::now());
            stats.favorite_type = Some(content_type);
        });
    }
}
