#![allow(dead_code)]

pub mod catalog;
pub mod notifier;
pub mod products;
pub mod store;
