//! Remote product catalog over HTTP.
//!
//! Fetches a JSON array of products from a single URL. Any status of 400 or
//! above is treated as a failed fetch.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{CatalogProduct, ProductCatalog};

/// HTTP client for the upstream product feed.
#[derive(Debug, Clone)]
pub struct RemoteProductCatalog {
    client: Client,
    url: String,
    timeout: Duration,
}

impl RemoteProductCatalog {
    /// Creates a catalog client for `url`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to create HTTP client: {}", e),
            )
        })?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    fn external_error(message: String) -> DomainError {
        DomainError::new(ErrorCode::ExternalServiceError, message)
    }
}

#[async_trait]
impl ProductCatalog for RemoteProductCatalog {
    async fn fetch_products(&self) -> Result<Vec<CatalogProduct>, DomainError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                Self::external_error(format!(
                    "Product feed timed out after {}s",
                    self.timeout.as_secs()
                ))
            } else {
                Self::external_error(format!("Product feed request failed: {}", e))
            }
        })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::external_error(format!(
                "Product feed returned {}: {}",
                status, body
            ))
            .with_detail("status", status.as_u16().to_string()));
        }

        let products: Vec<CatalogProduct> = response
            .json()
            .await
            .map_err(|e| Self::external_error(format!("Invalid product feed body: {}", e)))?;

        tracing::debug!(url = %self.url, count = products.len(), "Fetched product feed");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/v1/products", addr)
    }

    #[tokio::test]
    async fn fetches_and_decodes_products() {
        let url = serve(Router::new().route(
            "/v1/products",
            get(|| async {
                r#"[{"createdAt":"2022-07-21T10:00:00.000Z","productName":"Tyre","manufacturer":"Kia","vehicle":"Rio","image":"http://img/1","id":"1"},
                    {"productName":"Mirror","id":"2"}]"#
            }),
        ))
        .await;
        let catalog = RemoteProductCatalog::new(url, Duration::from_secs(5)).unwrap();

        let products = catalog.fetch_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].product_name, "Tyre");
        assert_eq!(products[0].image_url, "http://img/1");
        assert!(products[0].created_at.is_some());
        assert_eq!(products[1].manufacturer, "");
    }

    #[tokio::test]
    async fn error_status_fails_the_fetch() {
        let url = serve(Router::new().route(
            "/v1/products",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
        ))
        .await;
        let catalog = RemoteProductCatalog::new(url, Duration::from_secs(5)).unwrap();

        let err = catalog.fetch_products().await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ExternalServiceError);
        assert_eq!(err.details.get("status"), Some(&"503".to_string()));
    }

    #[tokio::test]
    async fn malformed_body_fails_the_fetch() {
        let url = serve(Router::new().route("/v1/products", get(|| async { "{not json" })))
            .await;
        let catalog = RemoteProductCatalog::new(url, Duration::from_secs(5)).unwrap();

        let err = catalog.fetch_products().await.unwrap_err();
        assert!(err.message.contains("Invalid product feed body"));
    }
}
