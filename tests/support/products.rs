use restock::domain::{Product, Snapshot, SnapshotEntry};
use rust_decimal::Decimal;

pub fn product(name: &str, price: Option<Decimal>, available: bool) -> Product {
    Product::try_new(name, price, available).expect("valid product")
}

pub fn available(name: &str, price: Decimal) -> Product {
    product(name, Some(price), true)
}

pub fn unavailable(name: &str, price: Decimal) -> Product {
    product(name, Some(price), false)
}

pub fn snapshot(entries: &[(&str, bool)]) -> Snapshot {
    entries
        .iter()
        .map(|(name, availability)| SnapshotEntry::new(*name, *availability))
        .collect()
}
