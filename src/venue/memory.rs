//! In-memory venue provider for tests.

use std::collections::HashMap;

use async_trait::async_trait;

use super::models::VenuePricing;
use super::provider::{VenueError, VenueProvider};

#[derive(Debug, Clone, Default)]
pub struct InMemoryVenueProvider {
    venues: HashMap<String, VenuePricing>,
}

impl InMemoryVenueProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_venue(mut self, slug: &str, venue: VenuePricing) -> Self {
        self.venues.insert(slug.to_string(), venue);
        self
    }
}

#[async_trait]
impl VenueProvider for InMemoryVenueProvider {
    async fn fetch_venue(&self, slug: &str) -> Result<VenuePricing, VenueError> {
        self.venues
            .get(slug)
            .cloned()
            .ok_or_else(|| VenueError::NotFound(slug.to_string()))
    }
}
