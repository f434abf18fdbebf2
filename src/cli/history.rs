//! `kavya history` command implementations.

use super::{RULE_WIDTH, format_local_time, open_history, print_content};
use crate::config::Config;
use crate::core::DisplayedContent;
use crate::core::types::HistoryEntry;
use crate::error::{Error, Result};

/// Default number of entries to list.
const DEFAULT_LIMIT: usize = 20;

/// Maximum length for content preview.
const CONTENT_PREVIEW_LEN: usize = 40;

/// List stored entries, newest first.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be opened.
pub fn list(config: &Config, limit: Option<usize>) -> Result<()> {
    let history = open_history(config)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT);

    if history.is_empty() {
        println!("No history yet.");
        println!("\nHistory is stored in: {}", config.storage.path.display());
        return Ok(());
    }

    println!(
        "{:<15} {:<17} {:<20} {:<16} Preview",
        "ID", "Created", "Type", "Keyword"
    );
    println!("{}", "─".repeat(RULE_WIDTH + 30));

    let shown: Vec<&HistoryEntry> = history.list().iter().take(limit).collect();
    for entry in &shown {
        println!(
            "{:<15} {:<17} {:<20} {:<16} {}",
            entry.id,
            format_local_time(entry.timestamp),
            entry.content_type.label(),
            format_preview(&entry.keyword, 15),
            format_preview(&entry.content, CONTENT_PREVIEW_LEN)
        );
    }

    println!("{}", "─".repeat(RULE_WIDTH + 30));
    println!("Showing {} of {} entries", shown.len(), history.len());

    Ok(())
}

/// Display a stored entry again.
///
/// # Errors
///
/// Returns [`Error::EntryNotFound`] if no entry has this id.
pub fn show(config: &Config, id: i64) -> Result<()> {
    let history = open_history(config)?;
    let entry = history.get(id).ok_or(Error::EntryNotFound(id))?;

    print_content(&DisplayedContent {
        content: entry.content.clone(),
        params: entry.request(),
    });
    println!("Generated {}", format_local_time(entry.timestamp));
    Ok(())
}

/// Delete one entry.
///
/// # Errors
///
/// Returns [`Error::EntryNotFound`] if no entry has this id.
pub fn remove(config: &Config, id: i64) -> Result<()> {
    let mut history = open_history(config)?;
    if !history.remove(id) {
        return Err(Error::EntryNotFound(id));
    }
    println!("Removed entry {id}");
    Ok(())
}

/// Delete every entry.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be opened.
pub fn clear(config: &Config) -> Result<()> {
    let mut history = open_history(config)?;
    let count = history.len();
    history.clear();
    println!("Cleared {count} entries");
    Ok(())
}

/// First line of `text`, cut to `max` characters.
fn format_preview(text: &str, max: usize) -> String {
    let first_line = text.lines().next().unwrap_or(text);
    if first_line.chars().count() > max {
        let cut: String = first_line.chars().take(max).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{ContentType, Length, Tone};
    use crate::core::history::HistoryRepository;
    use crate::core::types::{GenerationRequest, NewHistoryEntry};
    use crate::storage::FileBackend;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn offline_config(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.storage.path = dir.path().to_path_buf();
        config.api.endpoint = "not a url".to_string();
        config
    }

    #[test]
    fn show_works_without_a_valid_endpoint() {
        let dir = TempDir::new().unwrap();
        let config = offline_config(&dir);

        let store = Arc::new(FileBackend::new(dir.path().to_path_buf()).unwrap());
        let entry = HistoryRepository::open(store).add(NewHistoryEntry {
            request: GenerationRequest {
                content_type: ContentType::Riddle,
                keyword: "mirror".to_string(),
                tone: Tone::Serious,
                length: Length::Short,
            },
            content: "What has a face but no eyes?".to_string(),
        });

        show(&config, entry.id).unwrap();
        assert!(matches!(
            show(&config, entry.id + 1),
            Err(Error::EntryNotFound(_))
        ));
    }

    #[test]
    fn preview_truncates_long_text() {
        let long = "x".repeat(100);
        let preview = format_preview(&long, CONTENT_PREVIEW_LEN);
        assert_eq!(preview.chars().count(), CONTENT_PREVIEW_LEN + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn preview_takes_first_line() {
        assert_eq!(format_preview("roses are red\nviolets", 40), "roses are red");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let text = "दिल ".repeat(20);
        let preview = format_preview(&text, 10);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 13);
    }
}
