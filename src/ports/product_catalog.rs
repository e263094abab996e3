//! Product Catalog Port - upstream feed of products to import.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::foundation::DomainError;

/// Port for fetching the upstream product list.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<CatalogProduct>, DomainError>;
}

/// A product as published by the upstream feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: String,
    pub product_name: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub vehicle: String,
    #[serde(default, rename = "image")]
    pub image_url: String,
    pub created_at: Option<DateTime<Utc>>,
}
