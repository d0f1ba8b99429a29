//! Venue information from the upstream venue API.

pub mod models;
pub mod provider;

#[cfg(test)]
mod memory;

pub use models::VenuePricing;
pub use provider::{HttpVenueProvider, VenueError, VenueProvider};

#[cfg(test)]
pub use memory::InMemoryVenueProvider;
