//! SyncProductCatalogHandler - imports the upstream product feed into the
//! order store.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProductId, Timestamp};
use crate::domain::order::Product;
use crate::ports::{CatalogProduct, OrderRepository, ProductCatalog};

/// Outcome of one synchronisation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncProductCatalogResult {
    pub fetched: usize,
    pub stored: usize,
    pub failed: usize,
}

/// Handler that upserts every product of the feed.
///
/// A failing product is logged and skipped; only a failing fetch fails the
/// run.
pub struct SyncProductCatalogHandler {
    catalog: Arc<dyn ProductCatalog>,
    repository: Arc<dyn OrderRepository>,
}

impl SyncProductCatalogHandler {
    pub fn new(catalog: Arc<dyn ProductCatalog>, repository: Arc<dyn OrderRepository>) -> Self {
        Self {
            catalog,
            repository,
        }
    }

    pub async fn handle(&self) -> Result<SyncProductCatalogResult, DomainError> {
        let feed = self.catalog.fetch_products().await?;
        let mut result = SyncProductCatalogResult {
            fetched: feed.len(),
            ..Default::default()
        };

        for entry in feed {
            let external_id = entry.id.clone();
            match self.repository.upsert_product(&to_product(entry)).await {
                Ok(()) => result.stored += 1,
                Err(e) => {
                    tracing::error!(external_id = %external_id, error = %e, "Failed to store catalog product");
                    result.failed += 1;
                }
            }
        }

        tracing::info!(
            fetched = result.fetched,
            stored = result.stored,
            failed = result.failed,
            "Product catalog synchronised"
        );

        Ok(result)
    }
}

fn to_product(entry: CatalogProduct) -> Product {
    Product {
        id: ProductId::new(),
        name: entry.product_name,
        description: String::new(),
        image: entry.image_url,
        availability_status: String::new(),
        available_items: 0,
        manufacturer: entry.manufacturer,
        vehicle: entry.vehicle,
        external_id: Some(entry.id),
        created_at: entry
            .created_at
            .map(Timestamp::from_datetime)
            .unwrap_or_else(Timestamp::now),
    }
}
