//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use storefront_commerce::CommerceError;
use storefront_data::FetchError;
use storefront_session::SessionError;

/// Uniform error body: `{"status":"error","message":...}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

/// Request-level failures, mapped onto HTTP statuses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or missing request field.
    #[error("{0}")]
    Validation(String),

    /// The request conflicts with current catalog state.
    #[error("{0}")]
    Conflict(String),

    /// The requested resource does not exist.
    #[error("Not found")]
    NotFound,

    /// The remote catalog failed; relays the upstream status when known.
    #[error("Unable to reach the product catalog")]
    Upstream(Option<u16>),

    /// Anything unexpected; the detail is logged, never sent to the client.
    #[error("Something went wrong")]
    Internal(String),
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound => AppError::NotFound,
            FetchError::Upstream { status } => AppError::Upstream(Some(status)),
            FetchError::Transport(e) => {
                tracing::warn!(error = %e, "catalog request failed");
                AppError::Upstream(None)
            }
            FetchError::Decode(detail) => {
                tracing::warn!(detail, "catalog response did not decode");
                AppError::Upstream(None)
            }
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<CommerceError> for AppError {
    fn from(err: CommerceError) -> Self {
        match err {
            CommerceError::OutOfStock => AppError::Conflict("Out of stock".to_owned()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Upstream(upstream) => upstream
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            AppError::Internal(detail) => {
                tracing::error!(detail, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            status: "error",
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
