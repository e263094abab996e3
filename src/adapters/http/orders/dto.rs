//! Request and response bodies of the order endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::OrderStatus;
use crate::domain::order::{Customer, Order, OrderProduct, Product};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `PATCH /api/orders/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CustomerResponse {
    pub uuid: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub registration_date: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            uuid: customer.id.to_string(),
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            phone_number: customer.phone_number,
            registration_date: *customer.registration_date.as_datetime(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub uuid: String,
    pub customer: CustomerResponse,
    pub status: OrderStatus,
    pub placed_date: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            uuid: order.id.to_string(),
            customer: order.customer.into(),
            status: order.status,
            placed_date: *order.placed_date.as_datetime(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub uuid: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub availability_status: String,
    pub available_items: i32,
    pub manufacturer: String,
    pub vehicle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            uuid: product.id.to_string(),
            name: product.name,
            description: product.description,
            image: product.image,
            availability_status: product.availability_status,
            available_items: product.available_items,
            manufacturer: product.manufacturer,
            vehicle: product.vehicle,
            external_id: product.external_id,
            created_at: *product.created_at.as_datetime(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderProductResponse {
    pub uuid: String,
    pub order_uuid: String,
    pub product_uuid: String,
    pub items: i32,
    pub product: ProductResponse,
}

impl From<OrderProduct> for OrderProductResponse {
    fn from(line: OrderProduct) -> Self {
        Self {
            uuid: line.id.to_string(),
            order_uuid: line.order_id.to_string(),
            product_uuid: line.product.id.to_string(),
            items: line.quantity,
            product: line.product.into(),
        }
    }
}

/// Error body shared by all endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}
