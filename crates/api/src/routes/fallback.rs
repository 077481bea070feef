//! JSON error responses for requests no handler accepts.

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Any path without a route.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::route_not_found(uri.path())
}

/// A routed path hit with a method it doesn't support.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{method} is not allowed on {}", uri.path()))
}
