//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresOrderRepository` - Orders, order lines, review scores, products
//! - `connect` - Pool construction with startup retries and migrations

mod order_repository;
mod pool;

pub use order_repository::PostgresOrderRepository;
pub use pool::{connect, run_migrations};
