//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;
use crate::venue::VenueError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    DeliveryNotPossible(PricingError),

    #[error("Venue not found: {0}")]
    VenueNotFound(String),

    #[error("Venue API error: {0}")]
    Upstream(VenueError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::NoApplicableRange { .. } => AppError::DeliveryNotPossible(err),
            PricingError::NegativeFee { .. } | PricingError::FeeOutOfRange { .. } => {
                AppError::Internal(err.to_string())
            }
            PricingError::TotalOutOfRange { .. } => AppError::BadRequest(err.to_string()),
        }
    }
}

impl From<VenueError> for AppError {
    fn from(err: VenueError) -> Self {
        match err {
            VenueError::NotFound(slug) => AppError::VenueNotFound(slug),
            other => AppError::Upstream(other),
        }
    }
}

impl AppError {
    fn error_type(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad_request",
            AppError::DeliveryNotPossible(_) => "delivery_not_possible",
            AppError::VenueNotFound(_) => "venue_not_found",
            AppError::Upstream(_) => "venue_api_error",
            AppError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) | AppError::DeliveryNotPossible(_) => StatusCode::BAD_REQUEST,
            AppError::VenueNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(e) => {
                tracing::warn!("Venue API error: {}", e);
                StatusCode::BAD_GATEWAY
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = PricingErrorResponse {
            error_type: self.error_type().to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
