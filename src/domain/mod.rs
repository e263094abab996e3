//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, statuses, errors)
//! - `order` - Orders, customers, products and order lines
//! - `review` - Vocabulary and state machine of the review conversation

pub mod foundation;
pub mod order;
pub mod review;
