//! Submission feedback lifecycle of one lead form.
//!
//! An accepted submission shows the success message and schedules its own
//! revert to `Idle`. Repeated acceptances are not guarded: each one schedules
//! an independent revert, and the earliest pending revert hides the message
//! even if a later submission re-showed it.

use crate::timer::TimerQueue;
use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// How long the success message stays up after an accepted submission.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(3400);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionFeedbackState {
    #[default]
    Idle,
    ShowingSuccess,
}

#[derive(Debug, Clone)]
pub struct SubmissionFeedback {
    state: SubmissionFeedbackState,
    reverts: TimerQueue<()>,
    display: Duration,
}

impl SubmissionFeedback {
    pub fn new(display: Duration) -> Self {
        Self {
            state: SubmissionFeedbackState::Idle,
            reverts: TimerQueue::new(),
            display,
        }
    }

    pub fn state(&self) -> SubmissionFeedbackState {
        self.state
    }

    /// Enter `ShowingSuccess` and schedule a revert `display` from `now`.
    pub fn on_accepted(&mut self, now: Instant) {
        self.state = SubmissionFeedbackState::ShowingSuccess;
        self.reverts.schedule(now + self.display, ());
        debug!(pending = self.reverts.len(), "Scheduled success revert");
    }

    /// Fire due reverts. Returns how many fired; each one leaves the state `Idle`.
    pub fn advance(&mut self, now: Instant) -> usize {
        let fired = self.reverts.drain_due(now).len();
        if fired > 0 {
            self.state = SubmissionFeedbackState::Idle;
        }
        fired
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.reverts.next_deadline()
    }
}

impl Default for SubmissionFeedback {
    fn default() -> Self {
        Self::new(SUCCESS_DISPLAY)
    }
}
