//! SQLite implementation of the durable profile-storage port.
//!
//! The two profile documents live in `kv_store` under fixed keys; reads and
//! writes are synchronous and last-writer-wins. A second process will not
//! observe a change until it re-reads storage.

use std::sync::Arc;

use biterec_core::ProfileStorage;
use biterec_domain::constants::{PROFILE_REGISTRY_KEY, PROFILE_STATE_KEY};
use biterec_domain::Result;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde_json::Value;
use tracing::warn;

use super::manager::{map_sql_error, DbManager};

/// [`ProfileStorage`] over the shared [`DbManager`].
pub struct SqliteProfileStorage {
    db: Arc<DbManager>,
}

impl SqliteProfileStorage {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    fn get(&self, key: &str) -> Result<Option<Value>> {
        let conn = self.db.get_connection()?;
        let raw: Option<String> = conn
            .query_row("SELECT value FROM kv_store WHERE key = ?", params![key], |row| row.get(0))
            .optional()
            .map_err(map_sql_error)?;

        // Unparsable text is reported as absent; the store layer substitutes
        // defaults and re-persists.
        Ok(raw.and_then(|text| match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "discarding unparsable stored document");
                None
            }
        }))
    }

    fn put(&self, key: &str, doc: &Value) -> Result<()> {
        let conn = self.db.get_connection()?;
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, doc.to_string(), Utc::now().timestamp()],
        )
        .map_err(map_sql_error)?;
        Ok(())
    }
}

impl ProfileStorage for SqliteProfileStorage {
    fn load_state(&self) -> Result<Option<Value>> {
        self.get(PROFILE_STATE_KEY)
    }

    fn save_state(&self, doc: &Value) -> Result<()> {
        self.put(PROFILE_STATE_KEY, doc)
    }

    fn load_registry(&self) -> Result<Option<Value>> {
        self.get(PROFILE_REGISTRY_KEY)
    }

    fn save_registry(&self, doc: &Value) -> Result<()> {
        self.put(PROFILE_REGISTRY_KEY, doc)
    }
}
