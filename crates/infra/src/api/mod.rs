//! HTTP clients for the remote BiteRec backend

pub mod client;
pub mod errors;
pub mod places;
pub mod shape;

pub use client::BiteRecApiClient;
pub use errors::ApiError;
pub use places::PlaceSearchClient;
