//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the order domain.

mod errors;
mod ids;
mod order_status;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CustomerId, OrderId, OrderProductId, ProductId};
pub use order_status::OrderStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
