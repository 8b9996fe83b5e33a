//! Domain data types

pub mod place;
pub mod profile;
pub mod restaurant;

pub use place::{GeoPoint, PlaceResult, PlaceSearchResponse};
pub use profile::{ProfileDescriptor, ProfilePatch, ProfileState, RemoteProfile};
pub use restaurant::{ListStatus, RestaurantRecord};
