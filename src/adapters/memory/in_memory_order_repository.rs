//! In-Memory Order Repository Adapter
//!
//! Keeps orders, order lines and review scores in memory.
//! Useful for testing and for running the service without a database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, OrderId, OrderProductId, OrderStatus};
use crate::domain::order::{Order, OrderProduct, Product};
use crate::ports::OrderRepository;

/// In-memory order store.
///
/// Order lines are listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
    lines: Arc<RwLock<Vec<OrderProduct>>>,
    scores: Arc<RwLock<HashMap<OrderProductId, i64>>>,
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores (or replaces) an order.
    pub async fn insert_order(&self, order: Order) {
        self.orders.write().await.insert(order.id, order);
    }

    /// Appends a line to its order.
    pub async fn insert_order_product(&self, line: OrderProduct) {
        self.lines.write().await.push(line);
    }

    /// Stores an order together with its lines.
    pub async fn seed(&self, order: Order, lines: Vec<OrderProduct>) {
        self.insert_order(order).await;
        self.lines.write().await.extend(lines);
    }

    /// Current status of an order, if it exists.
    pub async fn order_status(&self, order_id: &OrderId) -> Option<OrderStatus> {
        self.orders.read().await.get(order_id).map(|o| o.status)
    }

    /// Stored review score of a line, if one was recorded.
    pub async fn review_score(&self, order_product_id: &OrderProductId) -> Option<i64> {
        self.scores.read().await.get(order_product_id).copied()
    }

    /// Number of review scores stored.
    pub async fn review_count(&self) -> usize {
        self.scores.read().await.len()
    }

    /// Snapshot of the product catalog.
    pub async fn products(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_order(&self, order_id: &OrderId) -> Result<Option<Order>, DomainError> {
        Ok(self.orders.read().await.get(order_id).cloned())
    }

    async fn find_order_products(
        &self,
        order_id: &OrderId,
    ) -> Result<Vec<OrderProduct>, DomainError> {
        let lines = self.lines.read().await;
        Ok(lines
            .iter()
            .filter(|line| line.order_id == *order_id)
            .cloned()
            .collect())
    }

    async fn update_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), DomainError> {
        let mut orders = self.orders.write().await;
        match orders.get_mut(order_id) {
            Some(order) => {
                order.status = status;
                Ok(())
            }
            None => Err(
                DomainError::new(ErrorCode::OrderNotFound, "Order not found")
                    .with_detail("order_id", order_id.to_string()),
            ),
        }
    }

    async fn record_review(
        &self,
        order_product_id: &OrderProductId,
        score: i64,
    ) -> Result<(), DomainError> {
        let exists = self
            .lines
            .read()
            .await
            .iter()
            .any(|line| line.id == *order_product_id);
        if !exists {
            return Err(
                DomainError::new(ErrorCode::OrderProductNotFound, "Order product not found")
                    .with_detail("order_product_id", order_product_id.to_string()),
            );
        }
        self.scores.write().await.insert(*order_product_id, score);
        Ok(())
    }

    async fn upsert_product(&self, product: &Product) -> Result<(), DomainError> {
        let mut products = self.products.write().await;
        let existing = products.iter_mut().find(|p| match &product.external_id {
            Some(external) => p.external_id.as_deref() == Some(external.as_str()),
            None => p.id == product.id,
        });
        match existing {
            Some(slot) => {
                let id = slot.id;
                *slot = Product {
                    id,
                    ..product.clone()
                };
            }
            None => products.push(product.clone()),
        }
        Ok(())
    }
}
