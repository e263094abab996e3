//! OrderStatus enum for tracking the lifecycle of an order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{StateMachine, ValidationError};

/// Lifecycle status of an order.
///
/// Progresses `placed → preparing → sending → completed → reviewed`.
/// Only the review conversation moves an order into `reviewed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Placed,
    Preparing,
    Sending,
    Completed,
    Reviewed,
}

impl OrderStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Placed,
        OrderStatus::Preparing,
        OrderStatus::Sending,
        OrderStatus::Completed,
        OrderStatus::Reviewed,
    ];

    /// Storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Sending => "sending",
            OrderStatus::Completed => "completed",
            OrderStatus::Reviewed => "reviewed",
        }
    }

    /// Whether a review conversation may be started for the order.
    pub fn is_reviewable(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }

    /// Whether an operator may set this status directly through the API.
    ///
    /// `reviewed` is reserved for the review conversation.
    pub fn is_manually_assignable(&self) -> bool {
        !matches!(self, OrderStatus::Reviewed)
    }
}

impl StateMachine for OrderStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use OrderStatus::*;
        matches!(
            (self, target),
            (Placed, Preparing) | (Preparing, Sending) | (Sending, Completed) | (Completed, Reviewed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use OrderStatus::*;
        match self {
            Placed => vec![Preparing],
            Preparing => vec![Sending],
            Sending => vec![Completed],
            Completed => vec![Reviewed],
            Reviewed => vec![],
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("status", format!("unknown order status '{}'", s))
            })
    }
}
