//! SQLite-backed durable storage

pub mod manager;
pub mod profile_storage;

pub use manager::DbManager;
pub use profile_storage::SqliteProfileStorage;
