//! Order-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, OrderId, OrderStatus};

/// Errors of order queries and commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Order was not found.
    NotFound(OrderId),
    /// The requested status cannot be set.
    InvalidStatus(String),
    /// The order is not in a state that allows a review conversation.
    NotReviewable { order_id: OrderId, status: OrderStatus },
    /// Infrastructure error.
    Infrastructure(String),
}

impl OrderError {
    pub fn not_found(id: OrderId) -> Self {
        OrderError::NotFound(id)
    }
    pub fn invalid_status(message: impl Into<String>) -> Self {
        OrderError::InvalidStatus(message.into())
    }
    pub fn not_reviewable(order_id: OrderId, status: OrderStatus) -> Self {
        OrderError::NotReviewable { order_id, status }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        OrderError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            OrderError::NotFound(_) => ErrorCode::OrderNotFound,
            OrderError::InvalidStatus(_) => ErrorCode::ValidationFailed,
            OrderError::NotReviewable { .. } => ErrorCode::InvalidStateTransition,
            OrderError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            OrderError::NotFound(id) => format!("Order not found: {}", id),
            OrderError::InvalidStatus(msg) => format!("Invalid status: {}", msg),
            OrderError::NotReviewable { order_id, status } => format!(
                "Order {} is {} and cannot be reviewed until it is completed",
                order_id, status
            ),
            OrderError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for OrderError {}

impl From<DomainError> for OrderError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::OrderNotFound => match err.details.get("order_id").and_then(|id| id.parse().ok()) {
                Some(id) => OrderError::NotFound(id),
                None => OrderError::Infrastructure(err.message),
            },
            ErrorCode::ValidationFailed => OrderError::InvalidStatus(err.message),
            _ => OrderError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_includes_id() {
        let id = OrderId::new();
        let err = OrderError::not_found(id);
        assert_eq!(err.code(), ErrorCode::OrderNotFound);
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn not_reviewable_names_status() {
        let err = OrderError::not_reviewable(OrderId::new(), OrderStatus::Sending);
        assert!(err.message().contains("sending"));
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn domain_not_found_with_id_detail_converts() {
        let id = OrderId::new();
        let domain = DomainError::new(ErrorCode::OrderNotFound, "missing")
            .with_detail("order_id", id.to_string());
        assert_eq!(OrderError::from(domain), OrderError::NotFound(id));
    }

    #[test]
    fn database_error_converts_to_infrastructure() {
        let err = OrderError::from(DomainError::database("pool timed out"));
        assert!(matches!(err, OrderError::Infrastructure(msg) if msg.contains("pool timed out")));
    }
}
