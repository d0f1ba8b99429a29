//! Request DTOs for the pricing API endpoint.

use serde::Deserialize;

use crate::error::AppError;

use super::models::GeoPoint;

/// Raw query string of `GET /api/v1/delivery-order-price`.
///
/// Fields stay strings so that missing and malformed parameters get
/// distinct messages.
#[derive(Debug, Default, Deserialize)]
pub struct DeliveryOrderPriceQuery {
    #[serde(default)]
    pub venue_slug: Option<String>,
    #[serde(default)]
    pub cart_value: Option<String>,
    #[serde(default)]
    pub user_lat: Option<String>,
    #[serde(default)]
    pub user_lon: Option<String>,
}

/// Validated order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub venue_slug: String,
    pub cart_value: i64,
    pub user_location: GeoPoint,
}

impl DeliveryOrderPriceQuery {
    pub fn validate(self) -> Result<OrderRequest, AppError> {
        let venue_slug = required("venue_slug", self.venue_slug)?;

        let latitude = required("user_lat", self.user_lat)?
            .parse::<f64>()
            .ok()
            .filter(|lat| lat.is_finite())
            .ok_or_else(|| AppError::BadRequest("Invalid user latitude".to_string()))?;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::BadRequest(
                "Latitude must be between -90 and 90".to_string(),
            ));
        }

        let longitude = required("user_lon", self.user_lon)?
            .parse::<f64>()
            .ok()
            .filter(|lon| lon.is_finite())
            .ok_or_else(|| AppError::BadRequest("Invalid user longitude".to_string()))?;
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::BadRequest(
                "Longitude must be between -180 and 180".to_string(),
            ));
        }

        let cart_value = required("cart_value", self.cart_value)?
            .parse::<i64>()
            .map_err(|_| AppError::BadRequest("Invalid cart value".to_string()))?;
        if cart_value <= 0 {
            return Err(AppError::BadRequest(
                "Cart value must be a positive integer".to_string(),
            ));
        }

        Ok(OrderRequest {
            venue_slug,
            cart_value,
            user_location: GeoPoint::new(latitude, longitude),
        })
    }
}

fn required(name: &str, value: Option<String>) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("Missing required parameter: {}", name)))
}
