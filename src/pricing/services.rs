//! Pricing service functions.
//!
//! `price` composes the calculators into a full quote; `quote_delivery_order`
//! feeds it with venue data fetched through a [`VenueProvider`].

use tracing::debug;

use crate::error::AppError;
use crate::venue::VenueProvider;

use super::calculators::{distance, resolve_fee, small_order_surcharge, total_price};
use super::models::{PriceResult, PricingInput};
use super::requests::OrderRequest;

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("delivery is not possible, no distance range covers {distance} meters")]
    NoApplicableRange { distance: i64 },

    #[error("delivery fee cannot be negative: {fee}")]
    NegativeFee { fee: i64 },

    #[error("delivery fee for {distance} meters is out of range")]
    FeeOutOfRange { distance: i64 },

    #[error("total price for cart value {cart_value} is out of range")]
    TotalOutOfRange { cart_value: i64 },
}

/// Price an order.
///
/// Fails without a partial result if the fee or the total cannot be computed.
pub fn price(input: &PricingInput) -> Result<PriceResult, PricingError> {
    let distance_meters = distance(input.user_location, input.venue_location);
    let delivery_fee = resolve_fee(distance_meters, input.venue_base_price, &input.ranges)?;
    let surcharge = small_order_surcharge(input.cart_value, input.order_minimum_no_surcharge);
    let total = total_price(input.cart_value, surcharge, delivery_fee).ok_or(
        PricingError::TotalOutOfRange {
            cart_value: input.cart_value,
        },
    )?;

    Ok(PriceResult {
        total_price: total,
        small_order_surcharge: surcharge,
        cart_value: input.cart_value,
        delivery_fee,
        distance_meters,
    })
}

/// Fetch the venue and price a validated order against it.
///
/// # Arguments
/// * `provider` - Source of venue location and delivery pricing
/// * `order` - Validated order from the HTTP layer
pub async fn quote_delivery_order(
    provider: &dyn VenueProvider,
    order: &OrderRequest,
) -> Result<PriceResult, AppError> {
    let venue = provider.fetch_venue(&order.venue_slug).await?;

    let input = PricingInput {
        cart_value: order.cart_value,
        venue_base_price: venue.base_price,
        ranges: venue.distance_ranges,
        order_minimum_no_surcharge: venue.order_minimum_no_surcharge,
        user_location: order.user_location,
        venue_location: venue.location,
    };

    let result = price(&input)?;
    debug!(
        "Priced order for {}: distance={}m fee={} surcharge={} total={}",
        order.venue_slug,
        result.distance_meters,
        result.delivery_fee,
        result.small_order_surcharge,
        result.total_price
    );

    Ok(result)
}
