//! Availability transition detection.
//!
//! Compares the previous [`Snapshot`] with the products from the current
//! fetch and reports every product that went from unavailable to available.
//! The detector is a pure function: it never touches storage or the network
//! and never mutates its inputs.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;

use super::product::Product;
use super::snapshot::{Snapshot, SnapshotEntry};

/// A product that became available since the previous snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub name: String,
    pub price: Option<Decimal>,
}

impl From<&Product> for Transition {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

/// Rules for products without a baseline in the previous snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectPolicy {
    /// Treat a product that is absent from the previous snapshot but
    /// available now as a transition.
    pub announce_new_products: bool,
}

/// Output of one detection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    /// Products that flipped to available, in `current` order.
    pub transitions: Vec<Transition>,
    /// Snapshot to persist for the next cycle.
    pub next: Snapshot,
}

impl Detection {
    #[must_use]
    pub fn has_transitions(&self) -> bool {
        !self.transitions.is_empty()
    }
}

/// Detect transitions with the default policy (a prior `false` is required).
#[must_use]
pub fn detect(previous: &Snapshot, current: &[Product]) -> Detection {
    detect_with(previous, current, DetectPolicy::default())
}

/// Detect transitions between `previous` and `current`.
///
/// Duplicate names in `current` resolve first-seen-wins: later records with
/// the same name are ignored for both the next snapshot and transitions.
/// Products missing from `current` are dropped from the next snapshot.
#[must_use]
pub fn detect_with(previous: &Snapshot, current: &[Product], policy: DetectPolicy) -> Detection {
    let baseline = previous.lookup();
    let mut seen: HashSet<&str> = HashSet::with_capacity(current.len());
    let mut detection = Detection::default();

    for product in current {
        if !seen.insert(product.name()) {
            continue;
        }

        let available = product.is_available();
        detection
            .next
            .push(SnapshotEntry::new(product.name(), available));

        let flipped = match baseline.get(product.name()) {
            Some(was_available) => !was_available && available,
            None => policy.announce_new_products && available,
        };
        if flipped {
            detection.transitions.push(Transition::from(product));
        }
    }

    detection
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(name: &str, price: Option<Decimal>, available: bool) -> Product {
        Product::try_new(name, price, available).unwrap()
    }

    fn names(detection: &Detection) -> Vec<&str> {
        detection
            .transitions
            .iter()
            .map(|t| t.name.as_str())
            .collect()
    }

    #[test]
    fn test_reference_scenario() {
        let previous = Snapshot::from_entries(vec![
            SnapshotEntry::new("A", false),
            SnapshotEntry::new("B", true),
        ]);
        let current = vec![
            product("A", Some(dec!(50)), true),
            product("B", Some(dec!(20)), false),
            product("C", Some(dec!(10)), true),
        ];

        let detection = detect(&previous, &current);

        assert_eq!(
            detection.transitions,
            vec![Transition {
                name: "A".into(),
                price: Some(dec!(50)),
            }]
        );
        assert_eq!(
            detection.next,
            Snapshot::from_entries(vec![
                SnapshotEntry::new("A", true),
                SnapshotEntry::new("B", false),
                SnapshotEntry::new("C", true),
            ])
        );
    }

    #[test]
    fn test_empty_current_yields_empty_detection() {
        let previous = Snapshot::from_entries(vec![SnapshotEntry::new("A", false)]);
        let detection = detect(&previous, &[]);
        assert!(detection.transitions.is_empty());
        assert!(detection.next.is_empty());
    }

    #[test]
    fn test_first_run_has_no_transitions() {
        let current = vec![product("A", None, true), product("B", None, true)];
        let detection = detect(&Snapshot::new(), &current);
        assert!(!detection.has_transitions());
        assert_eq!(detection.next.len(), 2);
    }

    #[test]
    fn test_new_product_announced_when_policy_allows() {
        let previous = Snapshot::from_entries(vec![SnapshotEntry::new("A", true)]);
        let current = vec![product("A", None, true), product("N", None, true)];
        let policy = DetectPolicy {
            announce_new_products: true,
        };

        let detection = detect_with(&previous, &current, policy);
        assert_eq!(names(&detection), vec!["N"]);
    }

    #[test]
    fn test_new_unavailable_product_never_announced() {
        let policy = DetectPolicy {
            announce_new_products: true,
        };
        let detection = detect_with(&Snapshot::new(), &[product("N", None, false)], policy);
        assert!(!detection.has_transitions());
    }

    #[test]
    fn test_disappeared_products_are_dropped() {
        let previous = Snapshot::from_entries(vec![
            SnapshotEntry::new("Gone", false),
            SnapshotEntry::new("Kept", false),
        ]);
        let detection = detect(&previous, &[product("Kept", None, false)]);
        assert_eq!(detection.next.lookup().get("Gone"), None);
        assert_eq!(detection.next.len(), 1);
    }

    #[test]
    fn test_still_available_is_not_a_transition() {
        let previous = Snapshot::from_entries(vec![SnapshotEntry::new("A", true)]);
        let detection = detect(&previous, &[product("A", None, true)]);
        assert!(!detection.has_transitions());
    }

    #[test]
    fn test_duplicate_current_names_first_wins() {
        let previous = Snapshot::from_entries(vec![SnapshotEntry::new("A", false)]);
        let current = vec![
            product("A", Some(dec!(1)), true),
            product("A", Some(dec!(2)), false),
            product("A", Some(dec!(3)), true),
        ];

        let detection = detect(&previous, &current);

        assert_eq!(detection.next.entries(), &[SnapshotEntry::new("A", true)]);
        assert_eq!(detection.transitions.len(), 1);
        assert_eq!(detection.transitions[0].price, Some(dec!(1)));
    }

    #[test]
    fn test_duplicate_current_names_first_unavailable_suppresses_later() {
        let previous = Snapshot::from_entries(vec![SnapshotEntry::new("A", false)]);
        let current = vec![product("A", None, false), product("A", None, true)];

        let detection = detect(&previous, &current);

        assert!(!detection.has_transitions());
        assert_eq!(detection.next.entries(), &[SnapshotEntry::new("A", false)]);
    }

    #[test]
    fn test_detect_does_not_mutate_inputs() {
        let previous = Snapshot::from_entries(vec![SnapshotEntry::new("A", false)]);
        let current = vec![product("A", None, true)];
        let previous_before = previous.clone();
        let current_before = current.clone();

        let _ = detect(&previous, &current);

        assert_eq!(previous, previous_before);
        assert_eq!(current, current_before);
    }
}
