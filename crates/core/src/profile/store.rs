//! Persisted profile store
//!
//! Single authoritative accessor/mutator for the active profile and the
//! profile registry. State lives in durable storage behind the
//! [`ProfileStorage`] port as two versioned JSON documents; every mutation
//! persists synchronously before returning, and every change to the
//! *active* profile raises the change-notification event exactly once,
//! after storage is consistent.

use std::sync::Arc;

use biterec_domain::constants::{
    DEFAULT_INITIALS, FALLBACK_PROFILE_ID, STORAGE_SCHEMA_VERSION,
};
use biterec_domain::utils::slug::{derive_initials, slugify};
use biterec_domain::{
    BiteRecError, ProfileDescriptor, ProfilePatch, ProfileState, Result,
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::events::ProfileEvents;
use super::ports::ProfileStorage;

/// Envelope for the active-profile document.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateDoc {
    schema_version: u32,
    #[serde(flatten)]
    state: ProfileState,
}

/// Envelope for the registry document.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistryDoc {
    schema_version: u32,
    profiles: Vec<ProfileDescriptor>,
}

struct Inner {
    state: ProfileState,
    registry: Vec<ProfileDescriptor>,
}

/// Injectable profile store service. Owns the two durable documents and
/// the invariants over them: the active `profile_id` is never empty, the
/// registry is never empty, and the active id always references a
/// registry entry.
pub struct ProfileStore {
    storage: Arc<dyn ProfileStorage>,
    events: ProfileEvents,
    inner: Mutex<Inner>,
}

impl ProfileStore {
    /// Load (or seed) state from storage. Corrupt or missing documents are
    /// replaced with defaults and re-persisted; the registry is self-healed
    /// and reconciled with the active id. Construction never emits.
    pub fn new(storage: Arc<dyn ProfileStorage>, events: ProfileEvents) -> Result<Self> {
        let mut state = Self::load_state(storage.as_ref())?;
        let registry = Self::load_registry(storage.as_ref(), &state)?;

        // The active profile must reference a registry entry; fall back to
        // the first one and persist the correction.
        if !registry.iter().any(|p| p.id == state.profile_id) {
            warn!(
                profile_id = %state.profile_id,
                "active profile missing from registry, falling back to first entry"
            );
            state = ProfileState::from(&registry[0]);
            persist_state(storage.as_ref(), &state)?;
        }

        Ok(Self { storage, events, inner: Mutex::new(Inner { state, registry }) })
    }

    fn load_state(storage: &dyn ProfileStorage) -> Result<ProfileState> {
        let parsed = storage
            .load_state()?
            .and_then(|doc| serde_json::from_value::<StateDoc>(doc).ok())
            .filter(|doc| doc.schema_version == STORAGE_SCHEMA_VERSION)
            .map(|doc| doc.state);

        match parsed {
            Some(mut state) => {
                state.normalize();
                Ok(state)
            }
            None => {
                let state = ProfileState::default();
                persist_state(storage, &state)?;
                Ok(state)
            }
        }
    }

    fn load_registry(
        storage: &dyn ProfileStorage,
        state: &ProfileState,
    ) -> Result<Vec<ProfileDescriptor>> {
        let parsed = storage
            .load_registry()?
            .and_then(|doc| serde_json::from_value::<RegistryDoc>(doc).ok())
            .filter(|doc| doc.schema_version == STORAGE_SCHEMA_VERSION)
            .map(|doc| doc.profiles);

        let mut profiles: Vec<ProfileDescriptor> = parsed
            .unwrap_or_default()
            .into_iter()
            .filter(|p| !p.id.trim().is_empty())
            .collect();
        let original_len = profiles.len();

        // Self-heal a known defect: an untouched placeholder default entry
        // accumulating alongside real entries.
        if profiles.len() > 1 {
            profiles.retain(|p| {
                !(p.id == FALLBACK_PROFILE_ID
                    && p.display_name.trim().is_empty()
                    && (p.initials.is_empty() || p.initials.to_uppercase() == DEFAULT_INITIALS))
            });
        }

        if profiles.is_empty() {
            let mut seed = ProfileDescriptor::from(state);
            if seed.display_name.trim().is_empty() {
                seed.display_name = "Profile 1".to_string();
            }
            profiles.push(seed);
            persist_registry(storage, &profiles)?;
        } else if profiles.len() != original_len {
            persist_registry(storage, &profiles)?;
        }

        Ok(profiles)
    }

    /// Handle to the change-notification bus.
    pub fn events(&self) -> &ProfileEvents {
        &self.events
    }

    /// Defensive copy of the current active-profile state. Never fails.
    pub fn get_profile_state(&self) -> ProfileState {
        self.inner.lock().state.clone()
    }

    /// The active profile id; always non-empty.
    pub fn active_profile_id(&self) -> String {
        self.inner.lock().state.profile_id.clone()
    }

    /// User-facing label for the active profile.
    pub fn profile_label(&self) -> String {
        self.inner.lock().state.label().to_string()
    }

    /// Seed ZIP of the active profile.
    pub fn default_zip(&self) -> String {
        self.inner.lock().state.default_zip.clone()
    }

    /// Whether destructive actions should prompt for confirmation.
    pub fn confirm_delete_enabled(&self) -> bool {
        self.inner.lock().state.confirm_delete
    }

    /// All known profiles, in registry order.
    pub fn list_profiles(&self) -> Vec<ProfileDescriptor> {
        self.inner.lock().registry.iter().filter(|p| !p.id.trim().is_empty()).cloned().collect()
    }

    /// Merge a patch into the active profile, re-normalize, persist, mirror
    /// the result into the registry, and notify subscribers.
    pub fn update_profile(&self, patch: &ProfilePatch) -> Result<ProfileState> {
        let state = {
            let mut inner = self.inner.lock();
            patch.apply(&mut inner.state);
            inner.state.normalize();
            persist_state(self.storage.as_ref(), &inner.state)?;

            // Keep the active profile mirrored into the registry.
            let descriptor = ProfileDescriptor::from(&inner.state);
            match inner.registry.iter_mut().find(|p| p.id == descriptor.id) {
                Some(existing) => *existing = descriptor,
                None => inner.registry.push(descriptor),
            }
            persist_registry(self.storage.as_ref(), &inner.registry)?;
            inner.state.clone()
        };

        self.events.emit(&state);
        Ok(state)
    }

    /// Create a new profile, switch to it, and notify subscribers.
    ///
    /// The id is derived from `name` (slug) and disambiguated against
    /// existing ids with a numeric suffix. Empty `initials`/`default_zip`
    /// are derived from the name and the current profile respectively.
    pub fn create_profile(
        &self,
        name: &str,
        initials: &str,
        default_zip: &str,
    ) -> Result<ProfileDescriptor> {
        let (descriptor, state) = {
            let mut inner = self.inner.lock();

            let trimmed = name.trim();
            let base_name = if trimmed.is_empty() { "Profile" } else { trimmed };
            let id_base = slugify(base_name);

            let mut candidate = id_base.clone();
            let mut n = 1;
            while inner.registry.iter().any(|p| p.id == candidate) {
                candidate = format!("{id_base}-{n}");
                n += 1;
            }

            let supplied: String = initials.trim().chars().take(3).collect();
            let initials = if supplied.is_empty() {
                derive_initials(base_name)
            } else {
                supplied.to_uppercase()
            };

            let zip = default_zip.trim();
            let default_zip = if zip.is_empty() {
                inner.state.default_zip.clone()
            } else {
                zip.to_string()
            };

            let descriptor = ProfileDescriptor {
                id: candidate,
                display_name: trimmed.to_string(),
                initials,
                default_zip,
                confirm_delete: inner.state.confirm_delete,
            };

            inner.registry.push(descriptor.clone());
            persist_registry(self.storage.as_ref(), &inner.registry)?;

            inner.state = ProfileState::from(&descriptor);
            persist_state(self.storage.as_ref(), &inner.state)?;
            (descriptor, inner.state.clone())
        };

        self.events.emit(&state);
        Ok(descriptor)
    }

    /// Switch to an existing profile. Unknown ids are a no-op returning
    /// `false`; state before and after is identical.
    pub fn switch_profile(&self, profile_id: &str) -> Result<bool> {
        let state = {
            let mut inner = self.inner.lock();
            let Some(target) = inner.registry.iter().find(|p| p.id == profile_id).cloned() else {
                return Ok(false);
            };
            inner.state = ProfileState::from(&target);
            persist_state(self.storage.as_ref(), &inner.state)?;
            inner.state.clone()
        };

        self.events.emit(&state);
        Ok(true)
    }

    /// Delete a profile (the active one when `profile_id` is `None`).
    ///
    /// Returns `false` without touching state when the target is unknown or
    /// when deletion would leave zero profiles. On success the registry is
    /// persisted, the active profile falls back to the first remaining
    /// entry when it was the one deleted, and subscribers are notified.
    pub fn delete_profile(&self, profile_id: Option<&str>) -> Result<bool> {
        let state = {
            let mut inner = self.inner.lock();
            let target =
                profile_id.map_or_else(|| inner.state.profile_id.clone(), ToString::to_string);

            // Keep at least one profile.
            if inner.registry.len() <= 1 {
                return Ok(false);
            }
            let Some(idx) = inner.registry.iter().position(|p| p.id == target) else {
                return Ok(false);
            };

            inner.registry.remove(idx);
            persist_registry(self.storage.as_ref(), &inner.registry)?;

            if inner.state.profile_id == target {
                inner.state = ProfileState::from(&inner.registry[0]);
                persist_state(self.storage.as_ref(), &inner.state)?;
            }
            inner.state.clone()
        };

        self.events.emit(&state);
        Ok(true)
    }
}

fn persist_state(storage: &dyn ProfileStorage, state: &ProfileState) -> Result<()> {
    let doc = serde_json::to_value(StateDoc {
        schema_version: STORAGE_SCHEMA_VERSION,
        state: state.clone(),
    })
    .map_err(|e| BiteRecError::Internal(format!("Failed to serialize profile state: {e}")))?;
    storage.save_state(&doc)
}

fn persist_registry(storage: &dyn ProfileStorage, profiles: &[ProfileDescriptor]) -> Result<()> {
    let doc = serde_json::to_value(RegistryDoc {
        schema_version: STORAGE_SCHEMA_VERSION,
        profiles: profiles.to_vec(),
    })
    .map_err(|e| BiteRecError::Internal(format!("Failed to serialize profile registry: {e}")))?;
    storage.save_registry(&doc)
}
