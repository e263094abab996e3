//! UpdateOrderStatusHandler - Command handler for setting an order's status
//! by hand.

use std::sync::Arc;

use crate::domain::foundation::{OrderId, OrderStatus, StateMachine};
use crate::domain::order::OrderError;
use crate::ports::OrderRepository;

/// Command to set the status of an order.
#[derive(Debug, Clone)]
pub struct UpdateOrderStatusCommand {
    pub order_id: OrderId,
    /// Requested status as received from the client.
    pub status: String,
}

/// Result of a successful status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOrderStatusResult {
    pub order_id: OrderId,
    pub previous: OrderStatus,
    pub status: OrderStatus,
}

/// Handler for manual status changes.
///
/// Any of `placed`, `preparing`, `sending` and `completed` may be set, in any
/// direction. `reviewed` is only ever set by a finished review conversation.
pub struct UpdateOrderStatusHandler {
    repository: Arc<dyn OrderRepository>,
}

impl UpdateOrderStatusHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateOrderStatusCommand,
    ) -> Result<UpdateOrderStatusResult, OrderError> {
        // 1. Parse and restrict the requested status
        let status = cmd
            .status
            .parse::<OrderStatus>()
            .map_err(|e| OrderError::invalid_status(e.to_string()))?;
        if !status.is_manually_assignable() {
            return Err(OrderError::invalid_status(format!(
                "'{}' can only be set by a review conversation",
                status
            )));
        }

        // 2. Load current status
        let order = self
            .repository
            .find_order(&cmd.order_id)
            .await?
            .ok_or_else(|| OrderError::not_found(cmd.order_id))?;

        // 3. Persist
        self.repository
            .update_order_status(&cmd.order_id, status)
            .await?;

        tracing::info!(
            order_id = %cmd.order_id,
            from = %order.status,
            to = %status,
            forward = order.status.can_transition_to(&status),
            "Order status updated"
        );

        Ok(UpdateOrderStatusResult {
            order_id: cmd.order_id,
            previous: order.status,
            status,
        })
    }
}
