//! API error types with HTTP response mapping.

use account_store::{AccountId, AccountStoreError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("{0}")]
    NotFound(String),
    /// Request body could not be turned into a valid account.
    #[error("{0}")]
    BadRequest(String),
    /// The path exists but not for this HTTP method.
    #[error("{0}")]
    MethodNotAllowed(String),
    /// Missing or wrong `Content-Type` header.
    #[error("{0}")]
    UnsupportedMediaType(String),
    /// Backing store failure.
    #[error(transparent)]
    Store(AccountStoreError),
}

impl ApiError {
    /// The 404 returned for an id that isn't in the store.
    pub fn account_not_found(id: AccountId) -> Self {
        ApiError::NotFound(format!("Account with id [{id}] could not be found."))
    }

    /// The 404 returned for a path no route matches.
    pub fn route_not_found(path: &str) -> Self {
        ApiError::NotFound(format!("No route matches {path}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::MethodNotAllowed(msg) => (StatusCode::METHOD_NOT_ALLOWED, msg),
            ApiError::UnsupportedMediaType(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "account store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<AccountStoreError> for ApiError {
    fn from(err: AccountStoreError) -> Self {
        match err {
            AccountStoreError::NotFound(id) => ApiError::account_not_found(id),
            other => ApiError::Store(other),
        }
    }
}
