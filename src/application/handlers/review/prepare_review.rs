//! PrepareReviewHandler - loads everything a review session needs before the
//! connection is upgraded.

use std::sync::Arc;

use crate::domain::foundation::OrderId;
use crate::domain::order::{Order, OrderError, OrderProduct};
use crate::ports::OrderRepository;

/// Query for the inputs of a review session.
#[derive(Debug, Clone)]
pub struct PrepareReviewQuery {
    pub order_id: OrderId,
}

/// A reviewable order with its lines in solicitation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedReview {
    pub order: Order,
    pub products: Vec<OrderProduct>,
}

/// Handler that checks an order can be reviewed and loads its lines.
pub struct PrepareReviewHandler {
    repository: Arc<dyn OrderRepository>,
}

impl PrepareReviewHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: PrepareReviewQuery) -> Result<PreparedReview, OrderError> {
        // 1. Load order
        let order = self
            .repository
            .find_order(&query.order_id)
            .await?
            .ok_or_else(|| OrderError::not_found(query.order_id))?;

        // 2. Only completed orders are reviewed
        if !order.is_reviewable() {
            return Err(OrderError::not_reviewable(order.id, order.status));
        }

        // 3. Load lines
        let products = self.repository.find_order_products(&order.id).await?;

        Ok(PreparedReview { order, products })
    }
}
