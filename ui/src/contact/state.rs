//! Contact form state: the field buffer and the submission lifecycle.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──ok──▶ Succeeded
//!   ▲                   │
//!   │                   └──err─▶ Failed(reason)
//!   └──── edit ◀── Succeeded / Failed
//! ```
//! Submitting again from `Succeeded`/`Failed` is allowed; while `Submitting`
//! further submits are ignored.

use api::ContactMessage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn to_message(&self) -> ContactMessage {
        ContactMessage::new(&self.name, &self.email, &self.message)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Enter `Submitting`. Returns `false` (and changes nothing) if a
    /// submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = SubmissionState::Submitting;
        true
    }

    /// Record the endpoint's answer. Ignored unless a submission is in flight.
    pub fn finish(&mut self, outcome: Result<(), String>) {
        if !self.is_submitting() {
            return;
        }
        *self = match outcome {
            Ok(()) => SubmissionState::Succeeded,
            Err(reason) => SubmissionState::Failed(reason),
        };
    }

    /// A field changed: settled states fall back to `Idle`.
    pub fn edited(&mut self) {
        if matches!(self, SubmissionState::Succeeded | SubmissionState::Failed(_)) {
            *self = SubmissionState::Idle;
        }
    }
}

/// Apply a finished submission to the draft: cleared on success, kept for a retry otherwise.
pub fn settle_draft(draft: &mut ContactDraft, outcome: &Result<(), String>) {
    if outcome.is_ok() {
        *draft = ContactDraft::default();
    }
}
