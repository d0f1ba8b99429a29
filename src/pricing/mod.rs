//! Delivery order pricing.
//!
//! Computes the total price of a delivery order from the cart value, the
//! distance between customer and venue, and the venue's delivery tiers.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{distance, resolve_fee, small_order_surcharge, total_price};
pub use models::{DistanceRange, GeoPoint, PriceResult, PricingInput};
pub use routes::router;
pub use services::{price, quote_delivery_order, PricingError};
