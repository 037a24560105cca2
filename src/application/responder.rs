//! On-demand "what is available now" queries.
//!
//! Each query performs its own catalog fetch and never touches the snapshot
//! store, so it can run alongside the poll loop without coordination.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::AvailabilityReport;
use crate::error::{Error, Result};
use crate::port::inbound::query::AvailabilityQuery;
use crate::port::outbound::catalog::CatalogFetcher;

/// User-visible text for a failed query.
pub const QUERY_FAILED_MESSAGE: &str =
    "Sorry, there was an error fetching the available products.";

/// User-visible text when nothing is in stock.
pub const NONE_AVAILABLE_MESSAGE: &str = "No products are currently available.";

/// Answers availability queries with a fresh, time-bounded fetch.
pub struct AvailabilityResponder {
    catalog: Arc<dyn CatalogFetcher>,
    timeout: Duration,
}

impl AvailabilityResponder {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogFetcher>, timeout: Duration) -> Self {
        Self { catalog, timeout }
    }
}

#[async_trait]
impl AvailabilityQuery for AvailabilityResponder {
    async fn available_now(&self) -> Result<AvailabilityReport> {
        let products = tokio::time::timeout(self.timeout, self.catalog.fetch_products())
            .await
            .map_err(|_| {
                Error::Network(format!(
                    "availability query timed out after {}s",
                    self.timeout.as_secs()
                ))
            })??;

        let report = AvailabilityReport::from_products(&products);
        info!(available = report.count(), "Availability query answered");
        Ok(report)
    }
}

/// Render a query result as plain text for chat replies and the CLI.
#[must_use]
pub fn render_report(result: &Result<AvailabilityReport>, currency: &str) -> String {
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "Availability query failed");
            return QUERY_FAILED_MESSAGE.to_string();
        }
    };

    match report {
        AvailabilityReport::NoneAvailable => NONE_AVAILABLE_MESSAGE.to_string(),
        AvailabilityReport::Listing(products) => {
            let mut text = String::from(
                "🛍️ Currently Available Products\n\n\
                Here are all the currently available products:\n\n",
            );
            for product in products {
                text.push_str(&format!(
                    "• {} - {}\n",
                    product.name,
                    product.display_price(currency)
                ));
            }
            text.push_str(&format!(
                "\nTotal available products: {}",
                products.len()
            ));
            text
        }
    }
}
