// File: src/state.rs
// Purpose: Form state machine - edits, submission and the success banner

use crate::errors::ErrorMap;
use crate::field::Field;
use crate::schema::FormSchema;
use crate::validator::SubmissionOutcome;
use crate::values::FormValues;
use serde::Serialize;
use tracing::{debug, info, trace};

/// Phase of the form as a whole
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    #[default]
    Editing,
    /// Only held while a submission is being validated; never observed
    /// between events.
    Submitting,
    /// Last submission failed; the error map is non-empty.
    Rejected,
    /// Last submission succeeded; the success banner is showing.
    Accepted,
}

/// Identifies one accepted submission, so a late banner timeout can tell
/// whether it still applies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SuccessTicket(u64);

impl SuccessTicket {
    fn next(self) -> Self {
        SuccessTicket(self.0.wrapping_add(1))
    }
}

/// Events the UI forwards to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Edit { field: Field, value: String },
    Submit,
    SuccessExpired(SuccessTicket),
}

/// Values, errors and phase of one form
///
/// Transitions consume the old state and return the new one, so a renderer
/// only ever sees complete states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: FormValues,
    errors: ErrorMap,
    phase: FormPhase,
    ticket: SuccessTicket,
}

impl FormState {
    /// Empty values, no errors, editing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether the success banner should be shown
    pub fn show_success(&self) -> bool {
        self.phase == FormPhase::Accepted
    }

    /// Ticket of the most recent accepted submission
    pub fn ticket(&self) -> SuccessTicket {
        self.ticket
    }

    /// Apply any event; submit also yields its outcome
    pub fn apply(self, schema: &FormSchema, event: FormEvent) -> (Self, Option<SubmissionOutcome>) {
        match event {
            FormEvent::Edit { field, value } => (self.on_field_edit(field, value), None),
            FormEvent::Submit => {
                let (state, outcome) = self.submit(schema);
                (state, Some(outcome))
            }
            FormEvent::SuccessExpired(ticket) => (self.expire_success(ticket), None),
        }
    }

    /// Store the new value and drop that field's stale error
    ///
    /// The new value is not validated; errors only appear on submit.
    pub fn on_field_edit(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.set(field, value);

        if let Some(message) = self.errors.clear_field(field) {
            debug!(%field, cleared = %message, "edit cleared field error");
        }

        // the banner stays up until its timeout even while typing
        if self.phase == FormPhase::Rejected {
            self.phase = FormPhase::Editing;
        }

        self
    }

    /// Run a full validation pass over the current values
    pub fn submit(mut self, schema: &FormSchema) -> (Self, SubmissionOutcome) {
        self.phase = FormPhase::Submitting;
        let outcome = schema.validate_all(&self.values);

        let state = match &outcome {
            SubmissionOutcome::Accepted(registration) => {
                info!(?registration, "registration accepted");
                self.on_submit_success()
            }
            SubmissionOutcome::Rejected(errors) => {
                debug!(failing = errors.len(), "registration rejected");
                self.errors = errors.clone();
                self.phase = FormPhase::Rejected;
                self
            }
        };

        (state, outcome)
    }

    /// Reset every field, clear errors and raise the success banner
    pub fn on_submit_success(self) -> Self {
        Self {
            values: FormValues::new(),
            errors: ErrorMap::new(),
            phase: FormPhase::Accepted,
            ticket: self.ticket.next(),
        }
    }

    /// Lower the success banner raised by `ticket`
    ///
    /// No-op when a later submission has happened since.
    pub fn expire_success(mut self, ticket: SuccessTicket) -> Self {
        if self.phase == FormPhase::Accepted && self.ticket == ticket {
            debug!(?ticket, "success banner expired");
            self.phase = FormPhase::Editing;
        } else {
            trace!(?ticket, current = ?self.ticket, phase = ?self.phase, "stale success timeout ignored");
        }
        self
    }
}
