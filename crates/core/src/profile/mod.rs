//! Persisted profile store, its storage port, and the change bus

pub mod events;
pub mod ports;
pub mod store;
