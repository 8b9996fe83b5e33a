//! Port interface for profile persistence
//!
//! This trait defines the boundary between the profile store's business
//! logic and the durable key-value storage underneath it.

use biterec_domain::Result;
use serde_json::Value;

/// Durable storage for the two profile documents (active state + registry).
///
/// Documents cross this boundary as raw JSON values so the store keeps
/// ownership of the corruption policy: an adapter returns `Ok(None)` both
/// for a missing record and for one it could not parse, and the store
/// substitutes defaults. Writes must be durable before returning.
pub trait ProfileStorage: Send + Sync {
    /// Load the active-profile document.
    fn load_state(&self) -> Result<Option<Value>>;

    /// Persist the active-profile document.
    fn save_state(&self, doc: &Value) -> Result<()>;

    /// Load the profile-registry document.
    fn load_registry(&self) -> Result<Option<Value>>;

    /// Persist the profile-registry document.
    fn save_registry(&self, doc: &Value) -> Result<()>;
}
