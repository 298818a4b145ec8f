//! Owner of one live form state
//!
//! All transitions run synchronously under the write lock. The only deferred
//! work is the success banner timeout, spawned on the tokio runtime after an
//! accepted submission.

use crate::config::Config;
use crate::context::FormContext;
use crate::field::Field;
use crate::schema::FormSchema;
use crate::state::{FormState, SuccessTicket};
use crate::validator::SubmissionOutcome;
use anyhow::Result;
use std::mem;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

/// Default time the success banner stays visible
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

/// Shared handle to a form; clones drive the same state
#[derive(Debug, Clone)]
pub struct FormController {
    schema: Arc<FormSchema>,
    state: Arc<RwLock<FormState>>,
    success_display: Duration,
}

impl FormController {
    pub fn new(schema: FormSchema, success_display: Duration) -> Self {
        Self {
            schema: Arc::new(schema),
            state: Arc::new(RwLock::new(FormState::new())),
            success_display,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.schema()?, config.success_display()))
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub async fn snapshot(&self) -> FormState {
        self.state.read().await.clone()
    }

    pub async fn context(&self) -> FormContext {
        FormContext::from(&*self.state.read().await)
    }

    /// Forward one edit event and return the resulting state
    pub async fn edit(&self, field: Field, value: impl Into<String>) -> FormState {
        let mut guard = self.state.write().await;
        let current = mem::take(&mut *guard);
        *guard = current.on_field_edit(field, value);
        guard.clone()
    }

    /// Validate the current values; on acceptance schedule the banner timeout
    pub async fn submit(&self) -> SubmissionOutcome {
        let mut guard = self.state.write().await;
        let current = mem::take(&mut *guard);
        let (next, outcome) = current.submit(&self.schema);
        let ticket = next.ticket();
        *guard = next;
        drop(guard);

        if outcome.is_accepted() {
            self.schedule_expiry(ticket);
        }

        outcome
    }

    fn schedule_expiry(&self, ticket: SuccessTicket) {
        let state = Arc::clone(&self.state);
        let delay = self.success_display;
        debug!(?ticket, ?delay, "scheduling success banner timeout");

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut guard = state.write().await;
            let current = mem::take(&mut *guard);
            *guard = current.expire_success(ticket);
        });
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(FormSchema::registration(), SUCCESS_DISPLAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormPhase;

    async fn fill(controller: &FormController) {
        controller.edit(Field::Name, "Jo").await;
        controller.edit(Field::Email, "jo@x.com").await;
        controller.edit(Field::Phone, "(11) 98888-7777").await;
        controller.edit(Field::Password, "Abcde1").await;
        controller.edit(Field::ConfirmPassword, "Abcde1").await;
    }

    async fn wait(duration: Duration) {
        tokio::time::sleep(duration).await;
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_expires_after_display_window() {
        let controller = FormController::default();
        fill(&controller).await;

        assert!(controller.submit().await.is_accepted());
        assert!(controller.context().await.show_success);

        wait(Duration::from_millis(4_900)).await;
        assert!(controller.snapshot().await.show_success());

        wait(Duration::from_millis(200)).await;
        let state = controller.snapshot().await;
        assert!(!state.show_success());
        assert_eq!(state.phase(), FormPhase::Editing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_acceptance_outlives_first_timer() {
        let controller = FormController::default();
        fill(&controller).await;
        controller.submit().await;

        wait(Duration::from_secs(3)).await;
        fill(&controller).await;
        assert!(controller.submit().await.is_accepted());

        // first timer fires at 5s and must not hide the second banner
        wait(Duration::from_secs(3)).await;
        assert!(controller.snapshot().await.show_success());

        wait(Duration::from_secs(3)).await;
        assert!(!controller.snapshot().await.show_success());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_submission_schedules_nothing() {
        let controller = FormController::default();
        let outcome = controller.submit().await;
        assert_eq!(outcome.errors().map(|e| e.len()), Some(5));

        wait(Duration::from_secs(10)).await;
        assert_eq!(controller.snapshot().await.phase(), FormPhase::Rejected);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let controller = FormController::default();
        let other = controller.clone();
        other.edit(Field::Email, "bad").await;
        assert_eq!(controller.snapshot().await.values().get(Field::Email), "bad");
    }
}
