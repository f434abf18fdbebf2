//! CLI command implementations.

pub mod catalog;
pub mod export;
pub mod generate;
pub mod history;
pub mod stats;
pub mod trending;

use crate::config::Config;
use crate::core::history::HistoryRepository;
use crate::core::notify::{Notification, NotificationKind};
use crate::core::{DisplayedContent, GenerationController};
use crate::error::Result;
use crate::remote::HttpGenerator;
use crate::storage::FileBackend;
use chrono::{DateTime, Local, Utc};
use std::sync::Arc;
use tracing::debug;

/// Width of horizontal rules in command output.
const RULE_WIDTH: usize = 72;

/// Open the file store configured in `config`.
fn open_store(config: &Config) -> Result<Arc<FileBackend>> {
    Ok(Arc::new(FileBackend::new(config.storage.path.clone())?))
}

/// Open history without a generator, for commands that only manage it.
fn open_history(config: &Config) -> Result<HistoryRepository> {
    Ok(HistoryRepository::open(open_store(config)?))
}

/// Build a controller talking to the configured endpoint, form preset from
/// `[defaults]`.
fn build_controller(config: &Config) -> Result<GenerationController> {
    let generator = HttpGenerator::new(&config.api.endpoint)?;
    debug!(endpoint = generator.endpoint(), "using generation endpoint");

    let controller = GenerationController::new(Arc::new(generator), open_store(config)?);
    controller.set_content_type(config.defaults.content_type);
    controller.set_tone(config.defaults.tone);
    controller.set_length(config.defaults.length);
    Ok(controller)
}

/// Print and drain the controller's pending notifications.
fn print_notifications(controller: &GenerationController) {
    for notification in controller.take_notifications() {
        print_notification(&notification);
    }
}

fn print_notification(notification: &Notification) {
    let marker = match notification.kind {
        NotificationKind::Success => "✓",
        NotificationKind::Warning => "!",
        NotificationKind::RateLimited => "⏳",
        NotificationKind::GenerationFailed => "✗",
    };
    eprintln!("{marker} {notification}");
}

/// Print generated content with its parameters.
fn print_content(displayed: &DisplayedContent) {
    let params = &displayed.params;
    println!(
        "{} {}  #{} • {} {} • {}",
        params.content_type.icon(),
        params.content_type.label(),
        params.keyword,
        params.tone.emoji(),
        params.tone,
        params.length.label()
    );
    println!("{}", "─".repeat(RULE_WIDTH));
    println!("{}", displayed.content);
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Format UTC time as local time for display.
fn format_local_time(utc: DateTime<Utc>) -> String {
    let local: DateTime<Local> = utc.into();
    local.format("%Y-%m-%d %H:%M").to_string()
}
