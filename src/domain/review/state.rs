//! Per-session state machine of a review conversation.
//!
//! ```text
//! Start → WelcomeSent → { AwaitingReview(i) → ScoreRecorded(i) → ReplySent(i) }*
//!       → StatusUpdated → Closed
//! ```
//!
//! Every non-terminal state may also move to `Aborted`.

use std::fmt;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Where a review session currently stands. Indices are zero-based product
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewSessionState {
    Start,
    WelcomeSent,
    AwaitingReview(usize),
    ScoreRecorded(usize),
    ReplySent(usize),
    StatusUpdated,
    Closed,
    Aborted,
}

impl StateMachine for ReviewSessionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ReviewSessionState::*;
        match *self {
            Start => vec![WelcomeSent, Aborted],
            WelcomeSent => vec![AwaitingReview(0), StatusUpdated, Aborted],
            AwaitingReview(i) => vec![ScoreRecorded(i), Aborted],
            ScoreRecorded(i) => vec![ReplySent(i), Aborted],
            ReplySent(i) => vec![AwaitingReview(i + 1), StatusUpdated, Aborted],
            StatusUpdated => vec![Closed, Aborted],
            Closed | Aborted => vec![],
        }
    }
}

impl fmt::Display for ReviewSessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewSessionState::Start => write!(f, "start"),
            ReviewSessionState::WelcomeSent => write!(f, "welcome_sent"),
            ReviewSessionState::AwaitingReview(i) => write!(f, "awaiting_review({})", i),
            ReviewSessionState::ScoreRecorded(i) => write!(f, "score_recorded({})", i),
            ReviewSessionState::ReplySent(i) => write!(f, "reply_sent({})", i),
            ReviewSessionState::StatusUpdated => write!(f, "status_updated"),
            ReviewSessionState::Closed => write!(f, "closed"),
            ReviewSessionState::Aborted => write!(f, "aborted"),
        }
    }
}

/// Tracks a session's state against the number of products it must cover.
///
/// On top of the plain transition table this rejects soliciting a product
/// past the end of the list and updating the status before every product
/// has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewProgress {
    state: ReviewSessionState,
    product_count: usize,
}

impl ReviewProgress {
    pub fn new(product_count: usize) -> Self {
        Self {
            state: ReviewSessionState::Start,
            product_count,
        }
    }

    pub fn state(&self) -> ReviewSessionState {
        self.state
    }

    /// Moves to `target`, validating both the transition and product bounds.
    pub fn advance(&mut self, target: ReviewSessionState) -> Result<(), ValidationError> {
        use ReviewSessionState::*;
        let next = self.state.transition_to(target)?;
        let in_bounds = match (self.state, next) {
            (_, AwaitingReview(i)) => i < self.product_count,
            (WelcomeSent, StatusUpdated) => self.product_count == 0,
            (ReplySent(i), StatusUpdated) => i + 1 == self.product_count,
            _ => true,
        };
        if !in_bounds {
            return Err(ValidationError::invalid_format(
                "review_progress",
                format!(
                    "Cannot move from {} to {} with {} products",
                    self.state, next, self.product_count
                ),
            ));
        }
        self.state = next;
        Ok(())
    }

    /// Marks the session aborted. Terminal states are left untouched.
    pub fn abort(&mut self) {
        if !self.state.is_terminal() {
            self.state = ReviewSessionState::Aborted;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }
}
