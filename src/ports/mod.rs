//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Review Capabilities
//!
//! - `SentimentAnalyzer` - Scores a free-text review
//! - `ResponseGenerator` - Produces the reply to a scored review
//!
//! ## Collaborators
//!
//! - `OrderRepository` - Order store gateway (orders, lines, review scores)
//! - `ReviewChannel` - Bidirectional frame transport to the reviewing client
//! - `ProductCatalog` - Upstream product feed

mod order_repository;
mod product_catalog;
mod response_generator;
mod review_channel;
mod sentiment_analyzer;

pub use order_repository::OrderRepository;
pub use product_catalog::{CatalogProduct, ProductCatalog};
pub use response_generator::{GenerationError, ResponseGenerator, ResponseGeneratorResult};
pub use review_channel::{ChannelError, Frame, FrameKind, ReviewChannel};
pub use sentiment_analyzer::{AnalysisError, SentimentAnalysisResult, SentimentAnalyzer};
