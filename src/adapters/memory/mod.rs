//! In-memory adapters for development and tests.

mod in_memory_order_repository;

pub use in_memory_order_repository::InMemoryOrderRepository;
