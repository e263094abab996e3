use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrderId, OrderStatus, Timestamp};

use super::Customer;

/// An order as stored, with its customer resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub status: OrderStatus,
    pub placed_date: Timestamp,
}

impl Order {
    /// Creates an order placed now for `customer`.
    pub fn new(customer: Customer, status: OrderStatus) -> Self {
        Self {
            id: OrderId::new(),
            customer,
            status,
            placed_date: Timestamp::now(),
        }
    }

    /// Whether a review conversation may be started for this order.
    pub fn is_reviewable(&self) -> bool {
        self.status.is_reviewable()
    }
}
