//! Domain constants shared across crates

/// Profile id substituted whenever storage is empty or corrupt.
pub const FALLBACK_PROFILE_ID: &str = "household-main";

/// Avatar initials used when a profile has none.
pub const DEFAULT_INITIALS: &str = "BR";

/// Seed ZIP for location-based search.
pub const DEFAULT_ZIP: &str = "83702";

/// Durable-storage key for the active profile document.
pub const PROFILE_STATE_KEY: &str = "biterec-profile-state-v1";

/// Durable-storage key for the profile registry document.
pub const PROFILE_REGISTRY_KEY: &str = "biterec-profiles-v1";

/// Version stamped into both durable documents. Documents with a missing
/// or unknown version are treated the same as corrupt storage.
pub const STORAGE_SCHEMA_VERSION: u32 = 1;

/// Slug used when a profile name reduces to nothing.
pub const FALLBACK_PROFILE_SLUG: &str = "profile";
