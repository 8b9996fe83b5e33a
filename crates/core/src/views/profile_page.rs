//! Profile settings page service
//!
//! Settings form backed by the profile store, local-settings reset, JSON
//! export/import of the profile plus its saved restaurants, and the
//! delete-profile flow gated by the confirmation preference.

use std::sync::Arc;

use biterec_domain::constants::{DEFAULT_INITIALS, DEFAULT_ZIP};
use biterec_domain::{
    BiteRecError, ProfilePatch, ProfileState, RestaurantRecord, Result,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::profile::store::ProfileStore;
use crate::remote::ports::{ListQuery, RestaurantApi};

/// What the settings form shows for the active profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSettingsForm {
    pub display_name: String,
    pub initials: String,
    pub default_zip: String,
    pub confirm_delete: bool,
    /// "Jess's Profile" or "Your Profile".
    pub greeting: String,
}

/// Portable export document; also the accepted import shape. The profile
/// half is a patch so partial documents import cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileExport {
    pub profile: ProfilePatch,
    #[serde(default)]
    pub restaurants: Vec<RestaurantRecord>,
}

/// Outcome of an import, for the completion message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub profile_updated: bool,
    pub restaurants_saved: usize,
}

pub struct ProfilePageService {
    api: Arc<dyn RestaurantApi>,
    profiles: Arc<ProfileStore>,
}

impl ProfilePageService {
    pub fn new(api: Arc<dyn RestaurantApi>, profiles: Arc<ProfileStore>) -> Self {
        Self { api, profiles }
    }

    pub fn settings_form(&self) -> ProfileSettingsForm {
        let state = self.profiles.get_profile_state();
        let greeting = if state.display_name.is_empty() {
            "Your Profile".to_string()
        } else {
            format!("{}'s Profile", state.display_name)
        };
        ProfileSettingsForm {
            display_name: state.display_name,
            initials: state.initials,
            default_zip: state.default_zip,
            confirm_delete: state.confirm_delete,
            greeting,
        }
    }

    /// Persist the settings form. Empty fields fall back to their defaults
    /// during normalization.
    pub fn save_settings(
        &self,
        display_name: &str,
        initials: &str,
        default_zip: &str,
        confirm_delete: bool,
    ) -> Result<ProfileState> {
        self.profiles.update_profile(&ProfilePatch {
            display_name: Some(display_name.trim().to_string()),
            initials: Some(initials.trim().to_string()),
            default_zip: Some(default_zip.trim().to_string()),
            confirm_delete: Some(confirm_delete),
            ..ProfilePatch::default()
        })
    }

    /// Reset this profile's local settings; remote restaurant data is
    /// untouched.
    pub fn erase_local_settings(&self) -> Result<ProfileState> {
        self.profiles.update_profile(&ProfilePatch {
            display_name: Some(String::new()),
            initials: Some(DEFAULT_INITIALS.to_string()),
            default_zip: Some(DEFAULT_ZIP.to_string()),
            confirm_delete: Some(true),
            ..ProfilePatch::default()
        })
    }

    /// Build the export document: the active profile plus its saved
    /// restaurants.
    pub async fn export(&self) -> Result<ProfileExport> {
        let state = self.profiles.get_profile_state();
        let restaurants = self
            .api
            .fetch_restaurants(&state.profile_id, &ListQuery::default())
            .await?;
        Ok(ProfileExport {
            profile: ProfilePatch {
                display_name: Some(state.display_name),
                initials: Some(state.initials),
                default_zip: Some(state.default_zip),
                confirm_delete: Some(state.confirm_delete),
                ..ProfilePatch::default()
            },
            restaurants,
        })
    }

    /// Apply an export document: patch the active profile, then re-save
    /// every restaurant scoped to the active profile.
    pub async fn import(&self, json: &str) -> Result<ImportSummary> {
        let doc: ProfileExport = serde_json::from_str(json).map_err(|e| {
            BiteRecError::InvalidInput(format!("Not a valid profile export document: {e}"))
        })?;

        let mut summary = ImportSummary::default();

        // Never let an import steal the profile identity; only settings
        // travel.
        let patch = ProfilePatch { profile_id: None, ..doc.profile };
        if patch.display_name.is_some()
            || patch.initials.is_some()
            || patch.default_zip.is_some()
            || patch.confirm_delete.is_some()
        {
            self.profiles.update_profile(&patch)?;
            summary.profile_updated = true;
        }

        let profile_id = self.profiles.active_profile_id();
        for mut record in doc.restaurants {
            record.profile_id = profile_id.clone();
            self.api.save_restaurant(&record).await?;
            summary.restaurants_saved += 1;
        }

        info!(
            profile_updated = summary.profile_updated,
            restaurants = summary.restaurants_saved,
            "profile import applied"
        );
        Ok(summary)
    }

    /// Whether the delete flow must show a confirmation prompt first.
    pub fn requires_delete_confirmation(&self) -> bool {
        self.profiles.confirm_delete_enabled()
    }

    /// Delete the active profile. Returns `false` when it is the last one.
    pub fn delete_active_profile(&self) -> Result<bool> {
        self.profiles.delete_profile(None)
    }
}
