//! Venue data providers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::models::{VenueDynamic, VenueEnvelope, VenuePricing, VenueStatic};

/// Venue fetch error types
#[derive(Debug, thiserror::Error)]
pub enum VenueError {
    #[error("venue {0} not found")]
    NotFound(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status code {status} from {url}")]
    UnexpectedStatus { url: String, status: StatusCode },

    #[error("failed to decode JSON response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to get response: {0}")]
    MissingVenue(String),

    #[error("invalid venue location: {0}")]
    InvalidLocation(String),

    #[error("base URL {0} cannot take path segments")]
    InvalidBaseUrl(String),
}

/// Source of venue pricing data
#[async_trait]
pub trait VenueProvider: Send + Sync {
    async fn fetch_venue(&self, slug: &str) -> Result<VenuePricing, VenueError>;
}

/// Venue provider backed by the upstream venue-information API.
///
/// Reads `{base_url}/{slug}/static` for the location and
/// `{base_url}/{slug}/dynamic` for delivery pricing.
#[derive(Debug, Clone)]
pub struct HttpVenueProvider {
    client: Client,
    base_url: Url,
}

impl HttpVenueProvider {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, VenueError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn document_url(&self, slug: &str, document: &str) -> Result<Url, VenueError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| VenueError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(slug)
            .push(document);
        Ok(url)
    }

    async fn get_document<T: DeserializeOwned>(
        &self,
        slug: &str,
        document: &str,
    ) -> Result<T, VenueError> {
        let url = self.document_url(slug, document)?;
        debug!("Fetching venue document {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(VenueError::NotFound(slug.to_string()));
        }
        if !status.is_success() {
            warn!("Venue API returned {} for {}", status, url);
            return Err(VenueError::UnexpectedStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        let envelope: VenueEnvelope<T> =
            serde_json::from_slice(&body).map_err(|source| VenueError::Decode {
                url: url.to_string(),
                source,
            })?;

        envelope.into_venue()
    }
}

#[async_trait]
impl VenueProvider for HttpVenueProvider {
    async fn fetch_venue(&self, slug: &str) -> Result<VenuePricing, VenueError> {
        let (static_data, dynamic_data) = tokio::try_join!(
            self.get_document::<VenueStatic>(slug, "static"),
            self.get_document::<VenueDynamic>(slug, "dynamic"),
        )?;

        VenuePricing::from_documents(static_data, dynamic_data)
    }
}
