//! Handler for the `available` command.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::domain::AvailabilityReport;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::query::AvailabilityQuery;

/// Fetch the catalog and list what is available right now.
///
/// A failed fetch is returned as an error so the process exits nonzero.
pub async fn execute(config: &Config) -> Result<()> {
    let catalog = bootstrap::build_catalog(config)?;
    let responder = bootstrap::build_responder(config, catalog);
    let report = responder.available_now().await?;
    let currency = &config.telegram.currency_symbol;

    if output::is_json() {
        output::json_output(json!({
            "command": "available",
            "count": report.count(),
            "products": report
                .products()
                .iter()
                .map(|p| json!({ "name": p.name, "price": p.price }))
                .collect::<Vec<_>>(),
        }));
        return Ok(());
    }

    match &report {
        AvailabilityReport::NoneAvailable => {
            output::warning(crate::application::responder::NONE_AVAILABLE_MESSAGE);
        }
        AvailabilityReport::Listing(products) => {
            output::section("Currently Available Products");
            for product in products {
                output::item(&product.name, &product.display_price(currency));
            }
            output::field("Total", products.len());
        }
    }

    Ok(())
}
