//! `kavya export` command implementation.

use super::open_history;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::export::export_entry;
use std::path::PathBuf;

/// Write a history entry's content to a text file.
///
/// Uses the current directory when `dir` is `None`.
///
/// # Errors
///
/// Returns [`Error::EntryNotFound`] for an unknown id, or an I/O error if
/// the file cannot be written.
pub fn run(config: &Config, id: i64, dir: Option<PathBuf>) -> Result<()> {
    let history = open_history(config)?;
    let entry = history.get(id).ok_or(Error::EntryNotFound(id))?;

    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    let path = export_entry(entry, &dir)?;
    println!("Saved {}", path.display());
    Ok(())
}
