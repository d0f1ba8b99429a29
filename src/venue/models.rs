//! Upstream venue API documents and the pricing view built from them.

use serde::Deserialize;

use crate::pricing::models::{DistanceRange, GeoPoint};

use super::provider::VenueError;

/// Body of both venue endpoints.
///
/// A successful response carries `venue_raw`; a failed one usually only
/// carries `message`.
#[derive(Debug, Deserialize)]
pub struct VenueEnvelope<T> {
    pub venue_raw: Option<T>,
    pub message: Option<String>,
}

impl<T> VenueEnvelope<T> {
    pub fn into_venue(self) -> Result<T, VenueError> {
        self.venue_raw.ok_or_else(|| {
            VenueError::MissingVenue(
                self.message
                    .unwrap_or_else(|| "response has no venue_raw".to_string()),
            )
        })
    }
}

/// `venue_raw` of `GET /{slug}/static`
#[derive(Debug, Deserialize)]
pub struct VenueStatic {
    pub location: VenueLocation,
}

#[derive(Debug, Deserialize)]
pub struct VenueLocation {
    /// `[longitude, latitude]`
    pub coordinates: Vec<f64>,
}

/// `venue_raw` of `GET /{slug}/dynamic`
#[derive(Debug, Deserialize)]
pub struct VenueDynamic {
    pub delivery_specs: DeliverySpecs,
}

#[derive(Debug, Deserialize)]
pub struct DeliverySpecs {
    pub order_minimum_no_surcharge: i64,
    pub delivery_pricing: DeliveryPricing,
}

#[derive(Debug, Deserialize)]
pub struct DeliveryPricing {
    pub base_price: i64,
    #[serde(default)]
    pub distance_ranges: Vec<DistanceRange>,
}

/// Venue data the pricing engine needs
#[derive(Debug, Clone, PartialEq)]
pub struct VenuePricing {
    pub location: GeoPoint,
    pub base_price: i64,
    pub distance_ranges: Vec<DistanceRange>,
    pub order_minimum_no_surcharge: i64,
}

impl VenuePricing {
    pub fn from_documents(
        static_data: VenueStatic,
        dynamic_data: VenueDynamic,
    ) -> Result<Self, VenueError> {
        let location = match static_data.location.coordinates.as_slice() {
            [longitude, latitude, ..] if longitude.is_finite() && latitude.is_finite() => {
                GeoPoint::new(*latitude, *longitude)
            }
            other => {
                return Err(VenueError::InvalidLocation(format!(
                    "expected [longitude, latitude], got {:?}",
                    other
                )))
            }
        };

        let specs = dynamic_data.delivery_specs;
        Ok(Self {
            location,
            base_price: specs.delivery_pricing.base_price,
            distance_ranges: specs.delivery_pricing.distance_ranges,
            order_minimum_no_surcharge: specs.order_minimum_no_surcharge,
        })
    }
}
