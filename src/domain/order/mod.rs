//! Order aggregate: the customer, the order header and its purchased lines.
//!
//! These are snapshots loaded from the order store. The review conversation
//! holds them immutably for the length of one session.

mod customer;
mod errors;
mod order;
mod product;

pub use customer::Customer;
pub use errors::OrderError;
pub use order::Order;
pub use product::{OrderProduct, Product};
