//! ListOrderProductsHandler - Query handler for the purchased lines of an order.

use std::sync::Arc;

use crate::domain::foundation::OrderId;
use crate::domain::order::{OrderError, OrderProduct};
use crate::ports::OrderRepository;

/// Query to list the lines of an order.
#[derive(Debug, Clone)]
pub struct ListOrderProductsQuery {
    pub order_id: OrderId,
}

/// Handler for listing order lines.
pub struct ListOrderProductsHandler {
    repository: Arc<dyn OrderRepository>,
}

impl ListOrderProductsHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    /// Returns the lines in listing order. An unknown order is an error, an
    /// order without lines is not.
    pub async fn handle(
        &self,
        query: ListOrderProductsQuery,
    ) -> Result<Vec<OrderProduct>, OrderError> {
        if self.repository.find_order(&query.order_id).await?.is_none() {
            return Err(OrderError::not_found(query.order_id));
        }

        Ok(self.repository.find_order_products(&query.order_id).await?)
    }
}
