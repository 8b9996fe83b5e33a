//! # BiteRec Domain
//!
//! Business domain types and models for BiteRec.
//!
//! This crate contains:
//! - Domain data types (ProfileState, RestaurantRecord, PlaceResult, ...)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and small pure utilities (geo, slugs, ids, hours)
//!
//! ## Architecture
//! - No dependencies on other BiteRec crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
