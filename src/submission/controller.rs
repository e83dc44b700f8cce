//! Submit gate and the simulated completion sequence
//!
//! Editing → submit → (errors: Editing) | Submitting → Succeeded → dismiss → Editing
//!
//! Deferred transitions run as [`DeferredTask`]s and come back as
//! [`SubmissionEvent`]s carrying a ticket. Only the event matching the
//! currently pending ticket is applied; anything else is stale.

use super::deferred::DeferredTask;
use crate::account::{AccountReceipt, AccountService, RegistrationRequest};
use crate::state::{FieldErrors, FormState, SubmissionPhase};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Identifies one scheduled transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Completion of a deferred transition, delivered back to the owner
#[derive(Debug, Clone)]
pub enum SubmissionEvent {
    /// The account service finished
    Completed {
        ticket: Ticket,
        result: Result<AccountReceipt, String>,
    },
    /// The success confirmation timed out
    AutoDismiss { ticket: Ticket },
}

impl SubmissionEvent {
    pub fn ticket(&self) -> Ticket {
        match self {
            Self::Completed { ticket, .. } | Self::AutoDismiss { ticket } => *ticket,
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; the form stays editable
    Rejected(FieldErrors),
    /// Validation passed and the form is now submitting
    Accepted,
    /// A submission is already in flight or finished
    Ignored,
    /// The values passed validation but could not be turned into a request
    Failed(String),
}

/// What applying a [`SubmissionEvent`] did to the form
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Succeeded(AccountReceipt),
    Failed(String),
    Dismissed,
    /// The event belonged to a cancelled or superseded transition
    Stale,
}

struct Pending {
    ticket: Ticket,
    task: DeferredTask,
}

pub struct SubmissionController {
    service: Arc<dyn AccountService>,
    events: UnboundedSender<SubmissionEvent>,
    auto_dismiss: Option<Duration>,
    pending: Option<Pending>,
    next_ticket: u64,
}

impl SubmissionController {
    pub fn new(service: Arc<dyn AccountService>, events: UnboundedSender<SubmissionEvent>) -> Self {
        Self {
            service,
            events,
            auto_dismiss: None,
            pending: None,
            next_ticket: 0,
        }
    }

    /// Controller plus the receiving end of its event channel
    pub fn channel(service: Arc<dyn AccountService>) -> (Self, UnboundedReceiver<SubmissionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(service, tx), rx)
    }

    /// Dismiss the success confirmation automatically after `delay`
    pub fn with_auto_dismiss(mut self, delay: Option<Duration>) -> Self {
        self.auto_dismiss = delay;
        self
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate the whole form and, if it passes, start the simulated sign-up
    pub fn submit(&mut self, form: &mut FormState) -> SubmitOutcome {
        if form.phase() != &SubmissionPhase::Editing {
            tracing::debug!(phase = ?form.phase(), "Submit ignored");
            return SubmitOutcome::Ignored;
        }

        let errors = form.record_submit_attempt();
        if !errors.is_empty() {
            tracing::info!(error_count = errors.len(), "Submission rejected");
            return SubmitOutcome::Rejected(errors.clone());
        }

        let request = match RegistrationRequest::from_values(form.values()) {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!("Could not build registration request: {err}");
                return SubmitOutcome::Failed(err.to_string());
            }
        };

        tracing::info!(username = %request.username, "Submission accepted");
        form.set_phase(SubmissionPhase::Submitting);

        let ticket = self.issue_ticket();
        let service = Arc::clone(&self.service);
        let task = DeferredTask::spawn(
            async move {
                let result = service
                    .register(request)
                    .await
                    .map_err(|err| err.to_string());
                SubmissionEvent::Completed { ticket, result }
            },
            self.events.clone(),
        );
        self.pending = Some(Pending { ticket, task });

        SubmitOutcome::Accepted
    }

    /// Apply a deferred completion if it is still current
    pub fn handle_event(&mut self, form: &mut FormState, event: SubmissionEvent) -> Transition {
        let is_current = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.ticket == event.ticket());
        if !is_current {
            tracing::debug!(ticket = ?event.ticket(), "Dropping stale submission event");
            return Transition::Stale;
        }
        self.pending = None;

        match event {
            SubmissionEvent::Completed {
                result: Ok(receipt),
                ..
            } => {
                tracing::info!(
                    account_id = %receipt.account_id,
                    username = %receipt.username,
                    "Registration succeeded"
                );
                form.set_phase(SubmissionPhase::Succeeded(receipt.clone()));
                if let Some(delay) = self.auto_dismiss {
                    let ticket = self.issue_ticket();
                    let task = DeferredTask::after(
                        delay,
                        SubmissionEvent::AutoDismiss { ticket },
                        self.events.clone(),
                    );
                    self.pending = Some(Pending { ticket, task });
                }
                Transition::Succeeded(receipt)
            }
            SubmissionEvent::Completed {
                result: Err(message),
                ..
            } => {
                tracing::warn!("Registration failed: {message}");
                form.set_phase(SubmissionPhase::Editing);
                Transition::Failed(message)
            }
            SubmissionEvent::AutoDismiss { .. } => {
                tracing::debug!("Success confirmation timed out");
                form.reset();
                Transition::Dismissed
            }
        }
    }

    /// Close the success confirmation and start over with a blank form.
    /// Returns false when there is nothing to dismiss.
    pub fn dismiss(&mut self, form: &mut FormState) -> bool {
        if !matches!(form.phase(), SubmissionPhase::Succeeded(_)) {
            return false;
        }
        self.cancel_pending();
        form.reset();
        tracing::debug!("Success confirmation dismissed");
        true
    }

    /// Cancel anything in flight and clear the form
    pub fn reset(&mut self, form: &mut FormState) {
        self.cancel_pending();
        form.reset();
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(ticket = ?pending.ticket, "Cancelling deferred transition");
            pending.task.cancel();
        }
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }
}
