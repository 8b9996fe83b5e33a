//! Outbound ports for remote data access.

pub mod ports;

pub use ports::{ListQuery, PlaceSearch, RestaurantApi};
