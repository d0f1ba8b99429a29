//! Delivery order price calculator.
//!
//! Axum service quoting the total price of a delivery order: cart value,
//! distance-tiered delivery fee and small-order surcharge.

pub mod config;
pub mod error;
pub mod pricing;
pub mod venue;

use std::sync::Arc;

use axum::{http::Method, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::venue::VenueProvider;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub venues: Arc<dyn VenueProvider>,
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", pricing::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
