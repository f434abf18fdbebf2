//! Generation controller.
//!
//! Owns the form, runs one generation request at a time, and applies the
//! success side effects (display, history, stats, celebration, notification)
//! in a fixed order. The state lock is never held across the remote call, so
//! a second `generate` while one is in flight sees `Submitting` and backs off.

use crate::core::catalog::{ContentType, Length, Tone};
use crate::core::celebration::Celebration;
use crate::core::history::HistoryRepository;
use crate::core::notify::Notification;
use crate::core::stats::StatsRepository;
use crate::core::types::{GenerationRequest, HistoryEntry, NewHistoryEntry, StatsRecord};
use crate::error::Error;
use crate::remote::Generator;
use crate::remote::types::GENERIC_FAILURE;
use crate::storage::KeyValueStore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

/// Request lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// Editable form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub content_type: ContentType,
    pub keyword: String,
    pub tone: Tone,
    pub length: Length,
}

impl FormState {
    /// The request this form would submit, keyword trimmed.
    #[must_use]
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest {
            content_type: self.content_type,
            keyword: self.keyword.trim().to_string(),
            tone: self.tone,
            length: self.length,
        }
    }

    fn has_keyword(&self) -> bool {
        !self.keyword.trim().is_empty()
    }
}

/// Text currently shown to the user, with the parameters it was made from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedContent {
    pub content: String,
    pub params: GenerationRequest,
}

/// Result of a generate or regenerate action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The API produced content; this is the history entry recorded for it.
    Succeeded(HistoryEntry),
    /// The API call failed; this notification was emitted.
    Failed(Notification),
    /// Keyword was empty; nothing was sent.
    MissingKeyword,
    /// A request was already in flight; nothing was sent.
    Busy,
}

struct ControllerState {
    phase: Phase,
    form: FormState,
    displayed: Option<DisplayedContent>,
    last_request: Option<GenerationRequest>,
    history: HistoryRepository,
    stats: StatsRepository,
    notifications: Vec<Notification>,
}

impl ControllerState {
    /// Move `Idle → Submitting`, or explain why not.
    fn begin(&mut self, replay: bool) -> Result<GenerationRequest, GenerateOutcome> {
        if self.phase == Phase::Submitting {
            return Err(GenerateOutcome::Busy);
        }
        if !self.form.has_keyword() {
            self.notifications.push(Notification::missing_keyword());
            return Err(GenerateOutcome::MissingKeyword);
        }

        let request = match (&self.last_request, replay) {
            (Some(last), true) => last.clone(),
            _ => self.form.to_request(),
        };

        self.phase = Phase::Submitting;
        self.displayed = None;
        self.last_request = Some(request.clone());
        Ok(request)
    }
}

/// Text shown for a failed generation: the API's own message, else the
/// generic fallback. Transport error details only reach the log.
fn failure_message(error: &Error) -> String {
    match error {
        Error::Remote { message, .. } => message.clone(),
        _ => GENERIC_FAILURE.to_string(),
    }
}

/// Drives generation requests against a [`Generator`] and the local store.
pub struct GenerationController {
    generator: Arc<dyn Generator>,
    celebration: Celebration,
    state: Mutex<ControllerState>,
}

impl GenerationController {
    /// Create a controller, loading history and stats from `store`.
    pub fn new(generator: Arc<dyn Generator>, store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_celebration(generator, store, Celebration::default())
    }

    /// Create a controller with a custom celebration effect.
    pub fn with_celebration(
        generator: Arc<dyn Generator>,
        store: Arc<dyn KeyValueStore>,
        celebration: Celebration,
    ) -> Self {
        let state = ControllerState {
            phase: Phase::Idle,
            form: FormState::default(),
            displayed: None,
            last_request: None,
            history: HistoryRepository::open(Arc::clone(&store)),
            stats: StatsRepository::open(store),
            notifications: Vec::new(),
        };
        Self {
            generator,
            celebration,
            state: Mutex::new(state),
        }
    }

    fn state(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Generate content from the current form.
    pub async fn generate(&self) -> GenerateOutcome {
        let request = match self.state().begin(false) {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };
        self.submit(request).await
    }

    /// Generate again with the last submitted parameters.
    ///
    /// Requires a keyword in the form. Falls back to the form when nothing
    /// has been submitted yet.
    pub async fn regenerate(&self) -> GenerateOutcome {
        let request = match self.state().begin(true) {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };
        self.submit(request).await
    }

    async fn submit(&self, request: GenerationRequest) -> GenerateOutcome {
        info!(
            content_type = %request.content_type,
            keyword = %request.keyword,
            tone = %request.tone,
            length = %request.length,
            "submitting generation request"
        );

        let result = self.generator.generate(&request).await;

        let mut state = self.state();
        let outcome = match result {
            Ok(response) => {
                let params = response.metadata.unwrap_or_else(|| request.clone());
                state.displayed = Some(DisplayedContent {
                    content: response.content.clone(),
                    params,
                });

                let entry = state.history.add(NewHistoryEntry {
                    request: request.clone(),
                    content: response.content,
                });
                state.stats.record_generation(request.content_type);
                self.celebration.trigger();
                state.notifications.push(Notification::success(format!(
                    "Your {} about {} is ready",
                    request.content_type.label().to_lowercase(),
                    request.keyword
                )));

                info!(id = entry.id, "generation succeeded");
                GenerateOutcome::Succeeded(entry)
            }
            Err(e) => {
                warn!(error = %e, "generation failed");
                state.displayed = None;

                let notification = Notification::failure(&failure_message(&e));
                state.notifications.push(notification.clone());
                GenerateOutcome::Failed(notification)
            }
        };
        state.phase = Phase::Idle;
        outcome
    }

    /// Show a stored entry again, without calling the API or touching the store.
    pub fn load_from_history(&self, entry: &HistoryEntry) {
        let mut state = self.state();
        state.form = FormState {
            content_type: entry.content_type,
            keyword: entry.keyword.clone(),
            tone: entry.tone,
            length: entry.length,
        };
        state.displayed = Some(DisplayedContent {
            content: entry.content.clone(),
            params: entry.request(),
        });
    }

    /// Put a suggested keyword into the form. Nothing else changes.
    pub fn select_trending_keyword(&self, keyword: &str) {
        self.state().form.keyword = keyword.to_string();
    }

    pub fn set_content_type(&self, content_type: ContentType) {
        self.state().form.content_type = content_type;
    }

    pub fn set_keyword(&self, keyword: &str) {
        self.state().form.keyword = keyword.to_string();
    }

    pub fn set_tone(&self, tone: Tone) {
        self.state().form.tone = tone;
    }

    pub fn set_length(&self, length: Length) {
        self.state().form.length = length;
    }

    #[must_use]
    pub fn form(&self) -> FormState {
        self.state().form.clone()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state().phase
    }

    /// Whether a generate action would be sent right now.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        let state = self.state();
        state.phase == Phase::Idle && state.form.has_keyword()
    }

    #[must_use]
    pub fn displayed(&self) -> Option<DisplayedContent> {
        self.state().displayed.clone()
    }

    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_active()
    }

    /// Notifications emitted since the last call, oldest first.
    pub fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut self.state().notifications)
    }

    /// History entries, newest first.
    #[must_use]
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.state().history.list().to_vec()
    }

    #[must_use]
    pub fn history_entry(&self, id: i64) -> Option<HistoryEntry> {
        self.state().history.get(id).cloned()
    }

    /// Delete one history entry. Returns whether it existed.
    pub fn remove_history_entry(&self, id: i64) -> bool {
        self.state().history.remove(id)
    }

    pub fn clear_history(&self) {
        self.state().history.clear();
    }

    #[must_use]
    pub fn stats(&self) -> StatsRecord {
        self.state().stats.get().clone()
    }
}
