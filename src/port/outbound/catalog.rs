//! Remote catalog port.

use async_trait::async_trait;

use crate::domain::Product;
use crate::error::Result;

/// Fetches the current product listing from a remote catalog.
///
/// Implementations must bound every request with a timeout. Failures are
/// reported as [`crate::error::Error::Network`],
/// [`crate::error::Error::RemoteFormat`] or
/// [`crate::error::Error::Validation`].
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// Fetch all products currently listed.
    async fn fetch_products(&self) -> Result<Vec<Product>>;

    /// Catalog name for logging.
    fn catalog_name(&self) -> &str;
}
