//! Failures of a review session.
//!
//! Every variant is terminal for the session that raised it. Each one keeps
//! the step that failed and, when a product was being handled, which order
//! line it was.

use thiserror::Error;

use crate::domain::foundation::{DomainError, OrderProductId};
use crate::ports::{AnalysisError, ChannelError, GenerationError};

use super::ReviewStep;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("transport failure at {step}{}: {source}", describe_line(.order_product_id))]
    Transport {
        step: ReviewStep,
        order_product_id: Option<OrderProductId>,
        source: ChannelError,
    },

    #[error("sentiment analysis failed for order product {order_product_id}: {source}")]
    Analysis {
        order_product_id: OrderProductId,
        source: AnalysisError,
    },

    #[error("reply generation failed for order product {order_product_id}: {source}")]
    Generation {
        order_product_id: OrderProductId,
        source: GenerationError,
    },

    #[error("persistence failure at {step}{}: {source}", describe_line(.order_product_id))]
    Persistence {
        step: ReviewStep,
        order_product_id: Option<OrderProductId>,
        source: DomainError,
    },

    #[error("record missing at {step}{}: {source}", describe_line(.order_product_id))]
    NotFound {
        step: ReviewStep,
        order_product_id: Option<OrderProductId>,
        source: DomainError,
    },

    #[error("session cancelled at {step}{}", describe_line(.order_product_id))]
    Cancelled {
        step: ReviewStep,
        order_product_id: Option<OrderProductId>,
    },
}

fn describe_line(order_product_id: &Option<OrderProductId>) -> String {
    match order_product_id {
        Some(id) => format!(" (order product {})", id),
        None => String::new(),
    }
}

impl ReviewError {
    /// Classifies a storage gateway failure: missing records become
    /// `NotFound`, everything else `Persistence`.
    pub fn from_gateway(
        step: ReviewStep,
        order_product_id: Option<OrderProductId>,
        source: DomainError,
    ) -> Self {
        if source.is_not_found() {
            ReviewError::NotFound {
                step,
                order_product_id,
                source,
            }
        } else {
            ReviewError::Persistence {
                step,
                order_product_id,
                source,
            }
        }
    }

    /// The step that failed.
    pub fn step(&self) -> ReviewStep {
        match self {
            ReviewError::Transport { step, .. }
            | ReviewError::Persistence { step, .. }
            | ReviewError::NotFound { step, .. }
            | ReviewError::Cancelled { step, .. } => *step,
            ReviewError::Analysis { .. } => ReviewStep::AnalyzeSentiment,
            ReviewError::Generation { .. } => ReviewStep::GenerateReply,
        }
    }

    /// The order line being handled when the failure happened.
    pub fn order_product_id(&self) -> Option<OrderProductId> {
        match self {
            ReviewError::Transport {
                order_product_id, ..
            }
            | ReviewError::Persistence {
                order_product_id, ..
            }
            | ReviewError::NotFound {
                order_product_id, ..
            }
            | ReviewError::Cancelled {
                order_product_id, ..
            } => *order_product_id,
            ReviewError::Analysis {
                order_product_id, ..
            }
            | ReviewError::Generation {
                order_product_id, ..
            } => Some(*order_product_id),
        }
    }

    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ReviewError::Transport { .. } => "transport",
            ReviewError::Analysis { .. } => "analysis",
            ReviewError::Generation { .. } => "generation",
            ReviewError::Persistence { .. } => "persistence",
            ReviewError::NotFound { .. } => "not_found",
            ReviewError::Cancelled { .. } => "cancelled",
        }
    }

    /// True when the peer went away or stopped answering, as opposed to a
    /// server-side failure.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            ReviewError::Transport {
                source: ChannelError::Closed | ChannelError::Timeout(_),
                ..
            }
        )
    }
}
