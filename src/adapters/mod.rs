//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Order store on PostgreSQL
//! - `memory` - Order store in memory, for tests and local runs
//! - `sentiment` / `generator` - Review capabilities
//! - `catalog` - Upstream product feed over HTTP
//! - `websocket` - Review channel over an upgraded socket
//! - `http` - REST and websocket endpoints

pub mod catalog;
pub mod generator;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod sentiment;
pub mod websocket;

pub use catalog::RemoteProductCatalog;
pub use generator::{BinaryResponseGenerator, GradedResponseGenerator};
pub use memory::InMemoryOrderRepository;
pub use postgres::PostgresOrderRepository;
pub use sentiment::{LengthHeuristicAnalyzer, LexiconSentimentAnalyzer};
pub use websocket::WebSocketChannel;
