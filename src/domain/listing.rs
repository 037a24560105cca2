//! Currently-available product listing for on-demand queries.

use rust_decimal::Decimal;
use serde::Serialize;

use super::product::Product;

/// A product that is available right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableProduct {
    pub name: String,
    pub price: Option<Decimal>,
}

impl AvailableProduct {
    /// Price rendered with `currency`, or a placeholder when unknown.
    #[must_use]
    pub fn display_price(&self, currency: &str) -> String {
        format_price(self.price, currency)
    }
}

/// Result of an availability query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityReport {
    /// One or more products are available.
    Listing(Vec<AvailableProduct>),
    /// The catalog was reachable but nothing is in stock.
    NoneAvailable,
}

impl AvailabilityReport {
    /// Build a report from a fresh catalog fetch.
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        let available: Vec<AvailableProduct> = products
            .iter()
            .filter(|p| p.is_available())
            .map(|p| AvailableProduct {
                name: p.name().to_string(),
                price: p.price(),
            })
            .collect();

        if available.is_empty() {
            Self::NoneAvailable
        } else {
            Self::Listing(available)
        }
    }

    #[must_use]
    pub fn products(&self) -> &[AvailableProduct] {
        match self {
            Self::Listing(products) => products,
            Self::NoneAvailable => &[],
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.products().len()
    }
}

/// Render an optional price with a currency symbol.
#[must_use]
pub fn format_price(price: Option<Decimal>, currency: &str) -> String {
    match price {
        Some(price) => format!("{currency}{}", price.normalize()),
        None => "Price not available".to_string(),
    }
}
