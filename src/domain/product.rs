//! Catalog product as seen by the availability detector.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::DomainError;

/// A product from one catalog fetch.
///
/// `name` is the join key between snapshots. `price` is optional and a
/// missing price is not the same as a zero price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    price: Option<Decimal>,
    available: bool,
}

impl Product {
    /// Create a product, rejecting blank names.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingName`] if `name` is empty or whitespace.
    pub fn try_new(
        name: impl Into<String>,
        price: Option<Decimal>,
        available: bool,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::MissingName);
        }
        Ok(Self {
            name,
            price,
            available,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_try_new_accepts_named_product() {
        let product = Product::try_new("Whey 1kg", Some(dec!(499)), true).unwrap();
        assert_eq!(product.name(), "Whey 1kg");
        assert_eq!(product.price(), Some(dec!(499)));
        assert!(product.is_available());
    }

    #[test]
    fn test_try_new_rejects_empty_name() {
        assert_eq!(
            Product::try_new("", None, false),
            Err(DomainError::MissingName)
        );
    }

    #[test]
    fn test_try_new_rejects_whitespace_name() {
        assert_eq!(
            Product::try_new(" \t\n", Some(dec!(10)), true),
            Err(DomainError::MissingName)
        );
    }

    #[test]
    fn test_zero_price_is_not_missing_price() {
        let free = Product::try_new("Sample", Some(Decimal::ZERO), true).unwrap();
        let unknown = Product::try_new("Sample", None, true).unwrap();
        assert_ne!(free, unknown);
    }
}
