//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Order reads and status changes, catalog import and the review
//! conversation each have their own handler.

pub mod handlers;

pub use handlers::{
    // Order handlers
    GetOrderHandler, GetOrderQuery, ListOrderProductsHandler, ListOrderProductsQuery,
    UpdateOrderStatusCommand, UpdateOrderStatusHandler, UpdateOrderStatusResult,
    // Review handlers
    PrepareReviewHandler, PrepareReviewQuery, PreparedReview, ReviewConversationEngine,
    ReviewSettings,
    // Catalog handlers
    SyncProductCatalogHandler, SyncProductCatalogResult,
};
