//! `kavya stats` command implementation.

use super::{format_local_time, open_store};
use crate::config::Config;
use crate::core::stats::StatsRepository;
use crate::core::types::StatsRecord;
use crate::error::Result;

/// Print usage statistics.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be opened.
pub fn run(config: &Config) -> Result<()> {
    let stats = StatsRepository::open(open_store(config)?);
    for line in render(stats.get()) {
        println!("{line}");
    }
    Ok(())
}

fn render(stats: &StatsRecord) -> Vec<String> {
    let last_visit = stats
        .last_visit
        .map_or_else(|| "never".to_string(), format_local_time);
    let favorite = stats.favorite_type.map_or_else(
        || "none yet".to_string(),
        |t| format!("{} {}", t.icon(), t.label()),
    );

    vec![
        format!("Total generations: {}", stats.total_generations),
        format!("Last generation:   {last_visit}"),
        format!("Last used type:    {favorite}"),
        format!("Streak:            {}", stats.streak),
    ]
}
