//! Product catalog handlers.

mod sync_product_catalog;

pub use sync_product_catalog::{SyncProductCatalogHandler, SyncProductCatalogResult};
