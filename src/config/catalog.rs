//! Product catalog configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upstream product feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// URL of the product feed
    pub url: Option<String>,

    /// Import the feed before the server starts
    #[serde(default)]
    pub sync_on_startup: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.url {
            Some(url) if !url.starts_with("http://") && !url.starts_with("https://") => {
                Err(ValidationError::InvalidCatalogUrl(url.clone()))
            }
            None if self.sync_on_startup => Err(ValidationError::CatalogUrlRequired),
            _ if self.timeout_secs == 0 => Err(ValidationError::InvalidTimeout),
            _ => Ok(()),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: None,
            sync_on_startup: false,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_config_defaults() {
        let config = CatalogConfig::default();
        assert!(config.url.is_none());
        assert!(!config.sync_on_startup);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sync_without_url_is_invalid() {
        let config = CatalogConfig {
            sync_on_startup: true,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::CatalogUrlRequired));
    }

    #[test]
    fn test_non_http_url_is_invalid() {
        let config = CatalogConfig {
            url: Some("ftp://feed.example.com/products".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCatalogUrl(_))
        ));
    }

    #[test]
    fn test_https_url_with_sync_is_valid() {
        let config = CatalogConfig {
            url: Some("https://feed.example.com/v1/products".to_string()),
            sync_on_startup: true,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
