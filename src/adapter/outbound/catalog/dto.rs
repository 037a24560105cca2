//! Wire types for the catalog listing endpoint.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::error::DomainError;
use crate::domain::Product;

/// Top-level listing response. Only `data` is required; everything else
/// (facets, totals, paging) is ignored.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub data: Vec<RawProduct>,
}

/// A product record as sent by the catalog. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub available: Value,
}

impl RawProduct {
    /// The catalog flags stock with `available: 1`; booleans are accepted
    /// too. Any other value counts as unavailable.
    #[must_use]
    pub fn is_available(&self) -> bool {
        match &self.available {
            Value::Bool(flag) => *flag,
            Value::Number(n) => n.as_i64() == Some(1) || n.as_f64() == Some(1.0),
            _ => false,
        }
    }

    /// Price as a decimal when the catalog sends a number or a numeric
    /// string. Anything else is treated as missing.
    #[must_use]
    pub fn decimal_price(&self) -> Option<Decimal> {
        match &self.price {
            Value::Null => None,
            Value::Number(n) => parse_decimal(&n.to_string()),
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => parse_decimal(s.trim()),
            _ => None,
        }
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

impl TryFrom<RawProduct> for Product {
    type Error = DomainError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        let available = raw.is_available();
        let price = raw.decimal_price();
        let name = raw.name.ok_or(DomainError::MissingName)?;
        if price.is_none() && !raw.price.is_null() {
            warn!(product = %name, price = %raw.price, "Ignoring unreadable price");
        }
        Product::try_new(name, price, available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn raw(json: &str) -> RawProduct {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_available_flag_values() {
        assert!(raw(r#"{"name":"A","available":1}"#).is_available());
        assert!(raw(r#"{"name":"A","available":true}"#).is_available());
        assert!(!raw(r#"{"name":"A","available":0}"#).is_available());
        assert!(!raw(r#"{"name":"A","available":2}"#).is_available());
        assert!(!raw(r#"{"name":"A","available":"1"}"#).is_available());
        assert!(!raw(r#"{"name":"A","available":null}"#).is_available());
        assert!(!raw(r#"{"name":"A"}"#).is_available());
    }

    #[test]
    fn test_price_forms() {
        assert_eq!(raw(r#"{"name":"A","price":50}"#).decimal_price(), Some(dec!(50)));
        assert_eq!(raw(r#"{"name":"A","price":49.99}"#).decimal_price(), Some(dec!(49.99)));
        assert_eq!(raw(r#"{"name":"A","price":"12.5"}"#).decimal_price(), Some(dec!(12.5)));
        assert_eq!(raw(r#"{"name":"A","price":null}"#).decimal_price(), None);
        assert_eq!(raw(r#"{"name":"A"}"#).decimal_price(), None);
    }

    #[test]
    fn test_unreadable_price_becomes_none() {
        for price in [r#""""#, r#""N/A""#, r#"{"amount":10}"#, "[1]", "true"] {
            let json = format!(r#"{{"name":"A","price":{price},"available":1}}"#);
            let product: Product = raw(&json).try_into().unwrap();
            assert_eq!(product.price(), None, "price {price}");
            assert!(product.is_available());
        }
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let product: Product = raw(
            r#"{"name":"A","price":10,"available":1,"sku":"X1","images":[{"src":"a.png"}]}"#,
        )
        .try_into()
        .unwrap();
        assert_eq!(product.name(), "A");
        assert!(product.is_available());
    }

    #[test]
    fn test_missing_name_rejected() {
        let result: Result<Product, _> = raw(r#"{"price":10,"available":1}"#).try_into();
        assert_eq!(result, Err(DomainError::MissingName));
    }

    #[test]
    fn test_null_name_rejected() {
        let result: Result<Product, _> = raw(r#"{"name":null,"available":1}"#).try_into();
        assert_eq!(result, Err(DomainError::MissingName));
    }
}
