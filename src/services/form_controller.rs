//! Contact form state controller.
//!
//! Owns the editable fields and the submission lifecycle
//! (`Idle → Submitting → Success | Error → Idle`) that the presentation layer
//! renders. Delivery itself is delegated to a [`DeliveryDispatcher`].

use crate::domain::{ContactSubmission, FormField, FormFields, ValidationError};
use crate::error::GENERIC_FAILURE_MESSAGE;
use crate::services::dispatcher::DeliveryDispatcher;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;

/// How long a success or error status stays visible before returning to idle.
pub const STATUS_RESET_DELAY: Duration = Duration::from_secs(5);

/// Status message shown after a successful delivery.
pub const SUCCESS_MESSAGE: &str = "Thank you for reaching out. I'll get back to you soon.";

/// Lifecycle state of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Success and Error are shown until reset or dismissed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// Everything the presentation layer reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmissionStatus,
    pub status_message: Option<String>,
}

struct FormState {
    fields: FormFields,
    status: SubmissionStatus,
    status_message: Option<String>,
    /// Bumped on every status change; a pending reset only fires if it still matches.
    generation: u64,
    reset_task: Option<JoinHandle<()>>,
    mounted: bool,
}

impl FormState {
    fn new() -> Self {
        Self {
            fields: FormFields::default(),
            status: SubmissionStatus::Idle,
            status_message: None,
            generation: 0,
            reset_task: None,
            mounted: true,
        }
    }

    /// Move to `status`, superseding any pending reset.
    fn enter(&mut self, status: SubmissionStatus, message: Option<String>) {
        tracing::debug!(from = %self.status, to = %status, "Form status change");
        self.status = status;
        self.status_message = message;
        self.generation += 1;
        self.cancel_reset();
    }

    fn cancel_reset(&mut self) {
        if let Some(task) = self.reset_task.take() {
            task.abort();
        }
    }
}

impl Drop for FormState {
    fn drop(&mut self) {
        self.cancel_reset();
    }
}

/// Drives one contact form.
///
/// Cloning yields another handle on the same form. At most one submission is
/// in flight at a time: `submit` while `Submitting` is a no-op.
#[derive(Clone)]
pub struct ContactFormController {
    state: Arc<Mutex<FormState>>,
    dispatcher: Arc<dyn DeliveryDispatcher>,
    reset_delay: Duration,
}

impl ContactFormController {
    /// Create a controller with the standard five second status display.
    pub fn new(dispatcher: Arc<dyn DeliveryDispatcher>) -> Self {
        Self::with_reset_delay(dispatcher, STATUS_RESET_DELAY)
    }

    pub fn with_reset_delay(dispatcher: Arc<dyn DeliveryDispatcher>, reset_delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::new())),
            dispatcher,
            reset_delay,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set one field. An error status is cleared so the visitor sees a clean
    /// slate while correcting input; nothing is validated here.
    pub fn update_field(&self, field: FormField, value: impl Into<String>) {
        let mut state = self.lock();
        state.fields.set(field, value);

        if state.status == SubmissionStatus::Error {
            state.enter(SubmissionStatus::Idle, None);
        }
    }

    /// Validate the current fields without changing any state.
    pub fn validate(&self) -> Result<ContactSubmission, ValidationError> {
        self.lock().fields.validate()
    }

    /// Validate and, if valid, deliver the current fields.
    ///
    /// Returns the status the form ends in. Validation failures never reach
    /// the dispatcher. On success the fields are cleared; on failure they are
    /// kept so the visitor can retry immediately.
    pub async fn submit(&self) -> SubmissionStatus {
        let submission = {
            let mut state = self.lock();

            if state.status == SubmissionStatus::Submitting {
                tracing::warn!("Submit ignored: a submission is already in flight");
                return SubmissionStatus::Submitting;
            }

            match state.fields.validate() {
                Ok(submission) => {
                    state.enter(SubmissionStatus::Submitting, None);
                    submission
                }
                Err(e) => {
                    tracing::debug!("Validation failed: {}", e);
                    state.enter(SubmissionStatus::Error, Some(e.message().to_string()));
                    self.schedule_reset(&mut state);
                    return SubmissionStatus::Error;
                }
            }
        };

        let outcome = self.dispatcher.dispatch(&submission).await;

        let mut state = self.lock();
        if outcome.success {
            state.fields.clear();
            state.enter(SubmissionStatus::Success, Some(SUCCESS_MESSAGE.to_string()));
        } else {
            let message = outcome
                .error
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            state.enter(SubmissionStatus::Error, Some(message));
        }
        self.schedule_reset(&mut state);

        state.status
    }

    /// Dismiss a success or error status right away ("Try again").
    ///
    /// Returns whether anything changed.
    pub fn dismiss(&self) -> bool {
        let mut state = self.lock();
        if !state.status.is_terminal() {
            return false;
        }
        state.enter(SubmissionStatus::Idle, None);
        true
    }

    /// The form has left the page. Pending status resets are dropped; a
    /// submission already in flight still runs to completion.
    pub fn unmount(&self) {
        let mut state = self.lock();
        state.mounted = false;
        state.cancel_reset();
    }

    pub fn status(&self) -> SubmissionStatus {
        self.lock().status
    }

    /// False only while a submission is in flight.
    pub fn is_submit_enabled(&self) -> bool {
        self.status() != SubmissionStatus::Submitting
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.lock();
        FormSnapshot {
            name: state.fields.name.clone(),
            email: state.fields.email.clone(),
            message: state.fields.message.clone(),
            status: state.status,
            status_message: state.status_message.clone(),
        }
    }

    /// Return to idle after the display delay, unless something else moved the
    /// form on first.
    fn schedule_reset(&self, state: &mut FormState) {
        if !state.mounted {
            return;
        }

        let generation = state.generation;
        let delay = self.reset_delay;
        let weak: Weak<Mutex<FormState>> = Arc::downgrade(&self.state);

        state.reset_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let Some(shared) = weak.upgrade() else {
                return;
            };
            let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if state.generation == generation && state.status.is_terminal() {
                tracing::debug!(from = %state.status, "Status display elapsed");
                state.status = SubmissionStatus::Idle;
                state.status_message = None;
                state.generation += 1;
                // detach our own handle rather than aborting it
                state.reset_task = None;
            }
        }));
    }
}
