//! `kavya generate` and `kavya regenerate` command implementations.

use super::{build_controller, print_content, print_notifications};
use crate::config::Config;
use crate::core::catalog::parse_param;
use crate::core::{GenerateOutcome, GenerationController, trending};
use crate::error::{Error, Result};
use tracing::debug;

/// Flags accepted by `kavya generate`.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    pub keyword: Option<String>,
    pub content_type: Option<String>,
    pub tone: Option<String>,
    pub length: Option<String>,
    /// Use a random trending keyword instead of `keyword`.
    pub trending: bool,
}

/// Run the generate command.
///
/// Returns `Ok(false)` when the request did not produce content; the reason
/// has already been printed.
///
/// # Errors
///
/// Returns an error for unknown parameters or when storage cannot be opened.
pub async fn run(config: &Config, options: &GenerateOptions) -> Result<bool> {
    let controller = build_controller(config)?;
    apply_options(&controller, options)?;

    let outcome = controller.generate().await;
    Ok(report(&controller, &outcome))
}

/// Run the regenerate command.
///
/// Reloads history entry `id` (newest when `None`) and asks for a fresh take
/// with the same parameters.
///
/// # Errors
///
/// Returns an error if history is empty or `id` does not exist.
pub async fn run_regenerate(config: &Config, id: Option<i64>) -> Result<bool> {
    let controller = build_controller(config)?;

    let history = controller.history();
    let entry = match id {
        Some(id) => history
            .iter()
            .find(|e| e.id == id)
            .ok_or(Error::EntryNotFound(id))?,
        None => history.first().ok_or(Error::EmptyHistory)?,
    };
    debug!(id = entry.id, "regenerating from history entry");
    controller.load_from_history(entry);

    let outcome = controller.regenerate().await;
    Ok(report(&controller, &outcome))
}

fn apply_options(controller: &GenerationController, options: &GenerateOptions) -> Result<()> {
    if let Some(value) = &options.content_type {
        controller.set_content_type(parse_param("type", value)?);
    }
    if let Some(value) = &options.tone {
        controller.set_tone(parse_param("tone", value)?);
    }
    if let Some(value) = &options.length {
        controller.set_length(parse_param("length", value)?);
    }

    if options.trending {
        if let Some(keyword) = trending::sample(&mut rand::thread_rng(), 1).first() {
            controller.select_trending_keyword(keyword);
        }
    } else if let Some(keyword) = &options.keyword {
        controller.set_keyword(keyword);
    }
    Ok(())
}

/// Print the outcome. Returns whether content was produced.
fn report(controller: &GenerationController, outcome: &GenerateOutcome) -> bool {
    print_notifications(controller);

    match outcome {
        GenerateOutcome::Succeeded(entry) => {
            if let Some(displayed) = controller.displayed() {
                print_content(&displayed);
            }
            if controller.is_celebrating() {
                println!("🎉🎊✨");
            }
            println!("Saved to history as {}", entry.id);
            true
        }
        GenerateOutcome::Busy => {
            eprintln!("A generation is already in progress.");
            false
        }
        GenerateOutcome::Failed(_) | GenerateOutcome::MissingKeyword => false,
    }
}
