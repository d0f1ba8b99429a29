//! Response DTOs for the pricing API endpoint.

use serde::{Deserialize, Serialize};

use super::models::PriceResult;

/// Delivery part of a price quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryResponse {
    pub fee: i64,
    pub distance: i64,
}

/// Response for a delivery order price quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOrderPriceResponse {
    pub total_price: i64,
    pub small_order_surcharge: i64,
    pub cart_value: i64,
    pub delivery: DeliveryResponse,
}

impl From<PriceResult> for DeliveryOrderPriceResponse {
    fn from(result: PriceResult) -> Self {
        Self {
            total_price: result.total_price,
            small_order_surcharge: result.small_order_surcharge,
            cart_value: result.cart_value,
            delivery: DeliveryResponse {
                fee: result.delivery_fee,
                distance: result.distance_meters,
            },
        }
    }
}

/// Generic error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
}
