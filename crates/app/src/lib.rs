//! # BiteRec App
//!
//! Application layer - page commands and the dependency-injection context.
//!
//! This crate contains:
//! - Page commands (the rendering sink calls these)
//! - Application context (dependency injection)
//! - Main entry point and setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the ports to their infrastructure implementations
//! - Commands translate domain errors into user-facing message strings

pub mod commands;
pub mod context;
pub mod utils;

pub use context::AppContext;
