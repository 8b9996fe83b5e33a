//! Shared test doubles for core unit tests.

use std::sync::Arc;

use biterec_domain::Result;
use parking_lot::Mutex;
use serde_json::Value;

use crate::profile::events::ProfileEvents;
use crate::profile::ports::ProfileStorage;
use crate::profile::store::ProfileStore;

/// In-memory implementation of the durable storage port.
#[derive(Default)]
pub(crate) struct MemoryStorage {
    pub state: Mutex<Option<Value>>,
    pub registry: Mutex<Option<Value>>,
}

impl ProfileStorage for MemoryStorage {
    fn load_state(&self) -> Result<Option<Value>> {
        Ok(self.state.lock().clone())
    }

    fn save_state(&self, doc: &Value) -> Result<()> {
        *self.state.lock() = Some(doc.clone());
        Ok(())
    }

    fn load_registry(&self) -> Result<Option<Value>> {
        Ok(self.registry.lock().clone())
    }

    fn save_registry(&self, doc: &Value) -> Result<()> {
        *self.registry.lock() = Some(doc.clone());
        Ok(())
    }
}

/// Profile store over fresh in-memory storage.
pub(crate) fn profile_store() -> Arc<ProfileStore> {
    #[allow(clippy::unwrap_used)]
    Arc::new(
        ProfileStore::new(Arc::new(MemoryStorage::default()), ProfileEvents::new()).unwrap(),
    )
}
