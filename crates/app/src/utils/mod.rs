//! Shared helpers for the application layer

pub mod logging;
