//! Saving generated text to plain-text files.

use crate::core::types::HistoryEntry;
use crate::error::Result;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// File name for an export: `<type>-<keyword>-<millis>.txt`.
#[must_use]
pub fn export_file_name(entry: &HistoryEntry, millis: i64) -> String {
    format!(
        "{}-{}-{millis}.txt",
        entry.content_type,
        sanitize_keyword(&entry.keyword)
    )
}

/// Reduce a keyword to characters that are safe in a file name.
fn sanitize_keyword(keyword: &str) -> String {
    let cleaned: String = keyword
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    let collapsed = cleaned
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if collapsed.is_empty() {
        "untitled".to_string()
    } else {
        collapsed
    }
}

/// Write the entry's content into `dir`, returning the created file's path.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written.
pub fn export_entry(entry: &HistoryEntry, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(entry, Utc::now().timestamp_millis()));
    fs::write(&path, &entry.content)?;
    Ok(path)
}
