//! GetOrderHandler - Query handler for retrieving an order with its customer.

use std::sync::Arc;

use crate::domain::foundation::OrderId;
use crate::domain::order::{Order, OrderError};
use crate::ports::OrderRepository;

/// Query to get an order by ID.
#[derive(Debug, Clone)]
pub struct GetOrderQuery {
    pub order_id: OrderId,
}

/// Handler for retrieving order details.
pub struct GetOrderHandler {
    repository: Arc<dyn OrderRepository>,
}

impl GetOrderHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetOrderQuery) -> Result<Order, OrderError> {
        self.repository
            .find_order(&query.order_id)
            .await?
            .ok_or_else(|| OrderError::not_found(query.order_id))
    }
}
