//! Value types flowing through the pricing engine.
//!
//! Everything here is built per request and dropped once the quote is
//! serialized; none of it is shared between requests.

use rust_decimal::Decimal;
use serde::Deserialize;

/// A position on Earth in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One delivery tier of a venue.
///
/// `min` is inclusive and `max` exclusive. Upstream calls the constant
/// `a` and the multiplier `b`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DistanceRange {
    pub min: i64,
    pub max: i64,
    #[serde(rename = "a")]
    pub constant: i64,
    #[serde(rename = "b")]
    pub multiplier: Decimal,
}

impl DistanceRange {
    pub fn contains(&self, distance: i64) -> bool {
        self.min <= distance && distance < self.max
    }
}

/// Everything needed to price one order
#[derive(Debug, Clone)]
pub struct PricingInput {
    /// Cart value in minor currency units
    pub cart_value: i64,
    pub venue_base_price: i64,
    /// Tiers in upstream order; the first matching tier wins
    pub ranges: Vec<DistanceRange>,
    pub order_minimum_no_surcharge: i64,
    pub user_location: GeoPoint,
    pub venue_location: GeoPoint,
}

/// Priced order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceResult {
    pub total_price: i64,
    pub small_order_surcharge: i64,
    pub cart_value: i64,
    pub delivery_fee: i64,
    pub distance_meters: i64,
}
