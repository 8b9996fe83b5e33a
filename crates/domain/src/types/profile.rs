//! Profile types
//!
//! The active profile and the profile-registry descriptors are owned by the
//! local store; `RemoteProfile` is the loose `/me` document owned by the
//! backend.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_INITIALS, DEFAULT_ZIP, FALLBACK_PROFILE_ID};

/// The active household profile. A single instance is active at a time and
/// scopes every restaurant-list read and write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileState {
    /// Stable partition key against remote restaurant records. Never empty
    /// after [`ProfileState::normalize`].
    pub profile_id: String,
    /// User-facing label; falls back to `profile_id` when empty.
    #[serde(default)]
    pub display_name: String,
    /// 1-3 character upper-case avatar label.
    pub initials: String,
    /// Seed value for location-based search.
    pub default_zip: String,
    /// Whether destructive actions prompt for confirmation.
    pub confirm_delete: bool,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            profile_id: FALLBACK_PROFILE_ID.to_string(),
            display_name: String::new(),
            initials: DEFAULT_INITIALS.to_string(),
            default_zip: DEFAULT_ZIP.to_string(),
            confirm_delete: true,
        }
    }
}

impl ProfileState {
    /// Enforce the state invariants: non-empty `profile_id` and
    /// `default_zip`, upper-case `initials` capped at three characters.
    /// Any missing value is replaced by its fallback.
    pub fn normalize(&mut self) {
        if self.profile_id.trim().is_empty() {
            self.profile_id = FALLBACK_PROFILE_ID.to_string();
        }
        let initials: String = self.initials.trim().chars().take(3).collect();
        self.initials =
            if initials.is_empty() { DEFAULT_INITIALS.to_string() } else { initials.to_uppercase() };
        if self.default_zip.trim().is_empty() {
            self.default_zip = DEFAULT_ZIP.to_string();
        }
    }

    /// Label shown in the profile pill: display name, else the id.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() { &self.profile_id } else { &self.display_name }
    }
}

/// Lightweight entry in the profile registry, used to populate the switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDescriptor {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    pub initials: String,
    pub default_zip: String,
    pub confirm_delete: bool,
}

impl From<&ProfileState> for ProfileDescriptor {
    fn from(state: &ProfileState) -> Self {
        Self {
            id: state.profile_id.clone(),
            display_name: state.display_name.clone(),
            initials: state.initials.clone(),
            default_zip: state.default_zip.clone(),
            confirm_delete: state.confirm_delete,
        }
    }
}

impl From<&ProfileDescriptor> for ProfileState {
    fn from(descriptor: &ProfileDescriptor) -> Self {
        let mut state = Self {
            profile_id: descriptor.id.clone(),
            display_name: descriptor.display_name.clone(),
            initials: descriptor.initials.clone(),
            default_zip: descriptor.default_zip.clone(),
            confirm_delete: descriptor.confirm_delete,
        };
        state.normalize();
        state
    }
}

/// Partial update applied to the active profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_delete: Option<bool>,
}

impl ProfilePatch {
    /// Merge this patch into `state`. Callers re-normalize afterwards.
    pub fn apply(&self, state: &mut ProfileState) {
        if let Some(profile_id) = &self.profile_id {
            state.profile_id = profile_id.clone();
        }
        if let Some(display_name) = &self.display_name {
            state.display_name = display_name.clone();
        }
        if let Some(initials) = &self.initials {
            state.initials = initials.clone();
        }
        if let Some(default_zip) = &self.default_zip {
            state.default_zip = default_zip.clone();
        }
        if let Some(confirm_delete) = self.confirm_delete {
            state.confirm_delete = confirm_delete;
        }
    }
}

/// The `/me` document owned by the backend. The backend controls the exact
/// shape; fields this client does not understand round-trip via `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_zip: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_fresh_storage_contract() {
        let state = ProfileState::default();
        assert_eq!(state.profile_id, "household-main");
        assert_eq!(state.display_name, "");
        assert_eq!(state.initials, "BR");
        assert_eq!(state.default_zip, "83702");
        assert!(state.confirm_delete);
    }

    #[test]
    fn normalize_replaces_missing_values() {
        let mut state = ProfileState {
            profile_id: "  ".to_string(),
            display_name: "Chase".to_string(),
            initials: "chase".to_string(),
            default_zip: String::new(),
            confirm_delete: false,
        };
        state.normalize();
        assert_eq!(state.profile_id, "household-main");
        assert_eq!(state.initials, "CHA");
        assert_eq!(state.default_zip, "83702");
        assert!(!state.confirm_delete);
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut state = ProfileState::default();
        let patch = ProfilePatch {
            display_name: Some("Jess".to_string()),
            confirm_delete: Some(false),
            ..ProfilePatch::default()
        };
        patch.apply(&mut state);
        assert_eq!(state.display_name, "Jess");
        assert!(!state.confirm_delete);
        assert_eq!(state.profile_id, "household-main");
    }

    #[test]
    fn label_falls_back_to_profile_id() {
        let mut state = ProfileState::default();
        assert_eq!(state.label(), "household-main");
        state.display_name = "Jess".to_string();
        assert_eq!(state.label(), "Jess");
    }
}
