use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrderId, OrderProductId, ProductId, Timestamp};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub availability_status: String,
    pub available_items: i32,
    pub manufacturer: String,
    pub vehicle: String,
    /// Identifier in the upstream product feed, if the product was imported.
    pub external_id: Option<String>,
    pub created_at: Timestamp,
}

impl Product {
    /// Creates a product with only a name, leaving the rest empty.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into(),
            description: String::new(),
            image: String::new(),
            availability_status: String::new(),
            available_items: 0,
            manufacturer: String::new(),
            vehicle: String::new(),
            external_id: None,
            created_at: Timestamp::now(),
        }
    }
}

/// One purchased line of an order, carrying a snapshot of the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderProduct {
    pub id: OrderProductId,
    pub order_id: OrderId,
    pub quantity: i32,
    pub product: Product,
}

impl OrderProduct {
    /// Creates a line for `product` on `order_id`.
    pub fn new(order_id: OrderId, quantity: i32, product: Product) -> Self {
        Self {
            id: OrderProductId::new(),
            order_id,
            quantity,
            product,
        }
    }

    /// The product name shown to the customer.
    pub fn product_name(&self) -> &str {
        &self.product.name
    }
}
