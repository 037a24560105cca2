use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use restock::domain::Snapshot;
use restock::error::{Error, Result};
use restock::port::outbound::store::SnapshotStore;

/// In-memory store whose loads and saves can be made to fail.
#[derive(Clone, Default)]
pub struct FlakyStore {
    snapshot: Arc<Mutex<Snapshot>>,
    fail_loads: Arc<Mutex<bool>>,
    fail_saves: Arc<Mutex<bool>>,
    saves: Arc<AtomicUsize>,
}

impl FlakyStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(snapshot)),
            ..Self::default()
        }
    }

    pub fn fail_loads(&self, fail: bool) {
        *self.fail_loads.lock() = fail;
    }

    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock() = fail;
    }

    pub fn current(&self) -> Snapshot {
        self.snapshot.lock().clone()
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl SnapshotStore for FlakyStore {
    fn load(&self) -> Result<Snapshot> {
        if *self.fail_loads.lock() {
            return Err(Error::Persistence {
                path: "flaky.json".into(),
                reason: "corrupt snapshot".to_string(),
            });
        }
        Ok(self.snapshot.lock().clone())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if *self.fail_saves.lock() {
            return Err(Error::Persistence {
                path: "flaky.json".into(),
                reason: "disk full".to_string(),
            });
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.snapshot.lock() = snapshot.clone();
        Ok(())
    }
}
