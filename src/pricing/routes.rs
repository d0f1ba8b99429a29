//! Pricing route handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::AppState;

use super::requests::DeliveryOrderPriceQuery;
use super::responses::DeliveryOrderPriceResponse;
use super::services;

/// Routes mounted under `/api/v1`
pub fn router() -> Router<AppState> {
    Router::new().route("/delivery-order-price", get(delivery_order_price))
}

/// Delivery order price quote
pub async fn delivery_order_price(
    State(state): State<AppState>,
    query: std::result::Result<Query<DeliveryOrderPriceQuery>, QueryRejection>,
) -> Result<Json<DeliveryOrderPriceResponse>> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let order = query.validate()?;
    tracing::info!(
        "Pricing order for venue {} (cart_value={})",
        order.venue_slug,
        order.cart_value
    );

    let result = services::quote_delivery_order(state.venues.as_ref(), &order).await?;

    Ok(Json(result.into()))
}
