//! Simulated contact form submission
//!
//! No request leaves the page: a valid form shows a sending state, then a
//! confirmation, then resets. An invalid form shakes briefly. Each phase
//! ends with a timer message posted back through the form channel.

use std::time::Duration;

use tokio::{
    runtime::Handle, sync::mpsc::UnboundedSender, task::JoinHandle, time,
};

use super::{Field, FormErrors, validate_form};
use crate::error::{Result, VitrineError};

/// Phase durations of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTimings {
    /// Shake animation on a rejected submit.
    pub shake: Duration,
    /// Time spent in the sending state before the confirmation.
    pub sending: Duration,
    /// Time the confirmation stays before the form resets.
    pub sent: Duration,
}

impl Default for SubmitTimings {
    fn default() -> Self {
        Self {
            shake: Duration::from_millis(500),
            sending: Duration::from_millis(2_000),
            sent: Duration::from_millis(3_000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    /// Rejected submit; the form plays its shake animation.
    Shaking,
    Sending,
    Sent,
}

impl SubmitState {
    /// The submit button stays disabled from sending until the reset.
    pub fn button_disabled(self) -> bool {
        matches!(self, SubmitState::Sending | SubmitState::Sent)
    }

    /// Button label override; `None` keeps the host's own label.
    pub fn button_label(self) -> Option<&'static str> {
        match self {
            SubmitState::Sending => Some("Sending..."),
            SubmitState::Sent => Some("Message Sent!"),
            SubmitState::Idle | SubmitState::Shaking => None,
        }
    }
}

/// Timer messages. Each carries the run that scheduled it so a message
/// from a superseded timer is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    ShakeElapsed(u64),
    SendElapsed(u64),
    /// The host clears the fields and label styling when this lands.
    ResetElapsed(u64),
}

impl FormMessage {
    fn run(self) -> u64 {
        match self {
            FormMessage::ShakeElapsed(run)
            | FormMessage::SendElapsed(run)
            | FormMessage::ResetElapsed(run) => run,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the form is shaking.
    Rejected(FormErrors),
    Sending,
    /// A submission is already in flight.
    Ignored,
}

/// Submission state of the contact form and its single pending timer.
#[derive(Debug)]
pub struct ContactSubmission {
    state: SubmitState,
    timings: SubmitTimings,
    sender: UnboundedSender<FormMessage>,
    pending: Option<JoinHandle<()>>,
    run: u64,
}

impl ContactSubmission {
    pub fn new(
        timings: SubmitTimings,
        sender: UnboundedSender<FormMessage>,
    ) -> Self {
        Self {
            state: SubmitState::Idle,
            timings,
            sender,
            pending: None,
            run: 0,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Handle a submit press with the current field values.
    pub fn submit(&mut self, fields: &[Field]) -> Result<SubmitOutcome> {
        if self.state.button_disabled() {
            tracing::debug!(
                "contact form busy ({:?}), submit ignored",
                self.state
            );
            return Ok(SubmitOutcome::Ignored);
        }

        match validate_form(fields) {
            Err(errors) => {
                self.enter(
                    SubmitState::Shaking,
                    self.timings.shake,
                    FormMessage::ShakeElapsed,
                )?;
                Ok(SubmitOutcome::Rejected(errors))
            }
            Ok(()) => {
                self.enter(
                    SubmitState::Sending,
                    self.timings.sending,
                    FormMessage::SendElapsed,
                )?;
                Ok(SubmitOutcome::Sending)
            }
        }
    }

    /// Apply a timer message. Returns the new state when it changed.
    pub fn update(
        &mut self,
        message: FormMessage,
    ) -> Result<Option<SubmitState>> {
        if message.run() != self.run {
            tracing::trace!("dropping stale form timer {message:?}");
            return Ok(None);
        }

        match (self.state, message) {
            (SubmitState::Shaking, FormMessage::ShakeElapsed(_))
            | (SubmitState::Sent, FormMessage::ResetElapsed(_)) => {
                self.pending = None;
                self.state = SubmitState::Idle;
            }
            (SubmitState::Sending, FormMessage::SendElapsed(_)) => {
                self.enter(
                    SubmitState::Sent,
                    self.timings.sent,
                    FormMessage::ResetElapsed,
                )?;
            }
            (state, message) => {
                tracing::trace!("ignoring {message:?} while {state:?}");
                return Ok(None);
            }
        }

        tracing::debug!("contact form is now {:?}", self.state);
        Ok(Some(self.state))
    }

    /// Abort the pending timer without changing state.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }

    fn enter(
        &mut self,
        state: SubmitState,
        after: Duration,
        message: fn(u64) -> FormMessage,
    ) -> Result<()> {
        let runtime =
            Handle::try_current().map_err(|_| VitrineError::NoRuntime)?;
        self.cancel();

        self.run = self.run.wrapping_add(1);
        let message = message(self.run);
        let sender = self.sender.clone();
        self.pending = Some(runtime.spawn(async move {
            time::sleep(after).await;
            // Receiver gone means the page is tearing down.
            let _ = sender.send(message);
        }));
        self.state = state;
        Ok(())
    }
}

impl Drop for ContactSubmission {
    fn drop(&mut self) {
        self.cancel();
    }
}
