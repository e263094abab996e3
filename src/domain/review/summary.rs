//! Results of a completed review session.

use serde::Serialize;

use crate::domain::foundation::{OrderId, OrderProductId};

/// The collected review of one purchased product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductReview {
    pub order_product_id: OrderProductId,
    pub product_name: String,
    pub score: i64,
    pub reply: String,
}

/// Outcome of a review session that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSessionSummary {
    pub order_id: OrderId,
    /// Reviews in the order the products were solicited.
    pub reviews: Vec<ProductReview>,
}

impl ReviewSessionSummary {
    pub fn new(order_id: OrderId) -> Self {
        Self {
            order_id,
            reviews: Vec::new(),
        }
    }

    /// Mean score across reviews, `None` when nothing was reviewed.
    pub fn average_score(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: i64 = self.reviews.iter().map(|r| r.score).sum();
        Some(total as f64 / self.reviews.len() as f64)
    }
}
