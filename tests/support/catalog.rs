use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use restock::domain::Product;
use restock::error::Result;
use restock::port::outbound::catalog::CatalogFetcher;

/// Catalog that replays scripted fetch results in order.
///
/// Once the script runs out every fetch returns an empty catalog.
#[derive(Clone, Default)]
pub struct ScriptedCatalog {
    script: Arc<Mutex<VecDeque<Result<Vec<Product>>>>>,
    fetches: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(self, result: Result<Vec<Product>>) -> Self {
        self.script
            .lock()
            .expect("lock catalog script")
            .push_back(result);
        self
    }

    pub fn then_ok(self, products: Vec<Product>) -> Self {
        self.then(Ok(products))
    }

    /// Every fetch sleeps this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogFetcher for ScriptedCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.script
            .lock()
            .expect("lock catalog script")
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn catalog_name(&self) -> &str {
        "scripted"
    }
}
