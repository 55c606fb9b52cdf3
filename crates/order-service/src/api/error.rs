use crate::order_actor::OrderError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Failures an HTTP handler can answer with. Each renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Malformed request body.")]
    MalformedBody,

    /// Some requested items are not even shaped like menu item IDs.
    #[error("Some items are invalid.")]
    UnparsableItemIds(Vec<serde_json::Value>),

    /// The path segment is not an order ID at all.
    #[error("Order not found.")]
    UnparsableOrderId(String),

    #[error(transparent)]
    Order(#[from] OrderError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody | ApiError::UnparsableItemIds(_) => StatusCode::BAD_REQUEST,
            ApiError::UnparsableOrderId(_) => StatusCode::NOT_FOUND,
            ApiError::Order(OrderError::NoItems | OrderError::InvalidItems { .. }) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Order(OrderError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Order(OrderError::ActorCommunicationError(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Order(OrderError::ActorCommunicationError(_)) => {
                "Order service unavailable.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
