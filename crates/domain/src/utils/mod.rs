//! Small pure utilities

pub mod geo;
pub mod hours;
pub mod ids;
pub mod slug;
