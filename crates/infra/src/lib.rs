//! # BiteRec Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite-backed durable storage for the profile documents
//! - HTTP clients for the restaurant API and the place-search endpoint
//! - Configuration loading (env vars and config files)
//!
//! ## Architecture
//! - Implements traits defined in `biterec-core`
//! - Depends on `biterec-domain` and `biterec-core`
//! - Contains all "impure" code (I/O, network)

pub mod api;
pub mod config;
pub mod database;

pub use api::{ApiError, BiteRecApiClient, PlaceSearchClient};
pub use database::{DbManager, SqliteProfileStorage};
