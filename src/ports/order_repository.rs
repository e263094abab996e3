//! Order Repository Port - the storage gateway for orders and reviews.
//!
//! The review conversation only writes through [`record_review`] and
//! [`update_order_status`]; loading the order and its lines happens before
//! the conversation starts.
//!
//! [`record_review`]: OrderRepository::record_review
//! [`update_order_status`]: OrderRepository::update_order_status

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OrderId, OrderProductId, OrderStatus};
use crate::domain::order::{Order, OrderProduct, Product};

/// Port for order persistence.
///
/// Writes that match no row fail with a not-found [`ErrorCode`].
///
/// [`ErrorCode`]: crate::domain::foundation::ErrorCode
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Loads an order with its customer.
    async fn find_order(&self, order_id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Loads the purchased lines of an order in their stable listing order.
    async fn find_order_products(&self, order_id: &OrderId)
        -> Result<Vec<OrderProduct>, DomainError>;

    /// Sets the lifecycle status of an order.
    ///
    /// # Errors
    ///
    /// - `OrderNotFound` if no order has this id
    async fn update_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), DomainError>;

    /// Stores the sentiment score of a review against an order line.
    ///
    /// # Errors
    ///
    /// - `OrderProductNotFound` if no line has this id
    async fn record_review(
        &self,
        order_product_id: &OrderProductId,
        score: i64,
    ) -> Result<(), DomainError>;

    /// Inserts a product or updates the one with the same external id.
    async fn upsert_product(&self, product: &Product) -> Result<(), DomainError>;
}
