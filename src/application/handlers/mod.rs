//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod catalog;
pub mod order;
pub mod review;

pub use catalog::{SyncProductCatalogHandler, SyncProductCatalogResult};
pub use order::{
    GetOrderHandler, GetOrderQuery, ListOrderProductsHandler, ListOrderProductsQuery,
    UpdateOrderStatusCommand, UpdateOrderStatusHandler, UpdateOrderStatusResult,
};
pub use review::{
    PrepareReviewHandler, PrepareReviewQuery, PreparedReview, ReviewConversationEngine,
    ReviewSettings,
};
