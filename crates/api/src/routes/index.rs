//! Root endpoint describing the service.

use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "Account REST API Service";
pub const SERVICE_VERSION: &str = "1.0";

#[derive(Serialize)]
pub struct IndexResponse {
    pub name: &'static str,
    pub version: &'static str,
}

/// GET / — returns the service name and API version.
pub async fn get() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: SERVICE_NAME,
        version: SERVICE_VERSION,
    })
}
