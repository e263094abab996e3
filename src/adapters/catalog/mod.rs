//! Product catalog adapters.

mod remote_catalog;

pub use remote_catalog::RemoteProductCatalog;
