//! Profile page and profile-switcher commands

use std::time::Instant;

use biterec_core::{ImportSummary, ProfileSettingsForm, StatsView};
use biterec_domain::{
    BiteRecError, ProfileDescriptor, ProfilePatch, ProfileState,
};

use super::finish;
use crate::context::AppContext;

/// Current state of the active profile. Never fails.
pub fn get_profile_state(ctx: &AppContext) -> ProfileState {
    ctx.profiles.get_profile_state()
}

/// All known profiles for the switcher.
pub fn list_profiles(ctx: &AppContext) -> Vec<ProfileDescriptor> {
    ctx.profiles.list_profiles()
}

/// Merge a patch into the active profile.
pub fn update_profile(ctx: &AppContext, patch: &ProfilePatch) -> Result<ProfileState, String> {
    let start = Instant::now();
    let result = ctx.profiles.update_profile(patch);
    finish("profile::update_profile", start, result)
}

/// Create a profile and switch to it.
pub fn create_profile(
    ctx: &AppContext,
    name: &str,
    initials: &str,
    default_zip: &str,
) -> Result<ProfileDescriptor, String> {
    let start = Instant::now();
    let result = ctx.profiles.create_profile(name, initials, default_zip);
    finish("profile::create_profile", start, result)
}

/// Switch to an existing profile; `Ok(false)` means the id is unknown.
pub fn switch_profile(ctx: &AppContext, profile_id: &str) -> Result<bool, String> {
    let start = Instant::now();
    let result = ctx.profiles.switch_profile(profile_id);
    finish("profile::switch_profile", start, result)
}

/// Delete a profile (the active one when `profile_id` is `None`).
pub fn delete_profile(ctx: &AppContext, profile_id: Option<&str>) -> Result<bool, String> {
    let start = Instant::now();
    let result = ctx.profiles.delete_profile(profile_id);
    finish("profile::delete_profile", start, result)
}

/// Settings form for the active profile.
pub fn get_settings_form(ctx: &AppContext) -> ProfileSettingsForm {
    ctx.profile_page.settings_form()
}

/// Persist the settings form.
pub fn save_settings(
    ctx: &AppContext,
    display_name: &str,
    initials: &str,
    default_zip: &str,
    confirm_delete: bool,
) -> Result<ProfileState, String> {
    let start = Instant::now();
    let result = ctx.profile_page.save_settings(display_name, initials, default_zip, confirm_delete);
    finish("profile::save_settings", start, result)
}

/// Reset the active profile's local settings.
pub fn erase_local_settings(ctx: &AppContext) -> Result<ProfileState, String> {
    let start = Instant::now();
    let result = ctx.profile_page.erase_local_settings();
    finish("profile::erase_local_settings", start, result)
}

/// Export the active profile and its restaurants as pretty-printed JSON.
pub async fn export_profile(ctx: &AppContext) -> Result<String, String> {
    let start = Instant::now();
    let result = async {
        let export = ctx.profile_page.export().await?;
        serde_json::to_string_pretty(&export)
            .map_err(|e| BiteRecError::Internal(format!("Failed to serialize export: {e}")))
    }
    .await;
    finish("profile::export_profile", start, result)
}

/// Import a previously exported document.
pub async fn import_profile(ctx: &AppContext, json: &str) -> Result<ImportSummary, String> {
    let start = Instant::now();
    let result = ctx.profile_page.import(json).await;
    finish("profile::import_profile", start, result)
}

/// Whether deleting the active profile must be confirmed first.
pub fn requires_delete_confirmation(ctx: &AppContext) -> bool {
    ctx.profile_page.requires_delete_confirmation()
}

/// List counts shown on the profile page.
pub async fn get_profile_stats(ctx: &AppContext) -> Result<StatsView, String> {
    let start = Instant::now();
    let result = ctx.stats.load(None).await;
    finish("profile::get_profile_stats", start, result)
}
