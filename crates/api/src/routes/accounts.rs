//! Account CRUD endpoints.

use std::sync::Arc;

use account_store::{Account, AccountId, AccountPayload, AccountStore, NewAccount};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode, header};

use crate::error::ApiError;

/// The only media type accepted on create.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Shared application state accessible from all handlers.
pub struct AppState<S: AccountStore> {
    pub store: S,
}

impl<S: AccountStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

/// Account id taken from the `{id}` path segment.
///
/// Anything other than a non-negative integer is treated as an unknown route.
#[derive(Debug, Clone, Copy)]
pub struct AccountPath(pub AccountId);

impl<S: Send + Sync> FromRequestParts<S> for AccountPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| route_not_found(parts))?;

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(route_not_found(parts));
        }

        raw.parse::<u64>()
            .ok()
            .and_then(|id| i64::try_from(id).ok())
            .map(|id| AccountPath(AccountId::new(id)))
            .ok_or_else(|| route_not_found(parts))
    }
}

fn route_not_found(parts: &Parts) -> ApiError {
    ApiError::route_not_found(parts.uri.path())
}

/// Rejects the request unless `Content-Type` is exactly `expected`.
///
/// This is a byte comparison, so parameters such as `; charset=utf-8` fail.
pub fn check_content_type(headers: &HeaderMap, expected: &str) -> Result<(), ApiError> {
    let rejection = || ApiError::UnsupportedMediaType(format!("Content-Type must be {expected}"));

    match headers.get(header::CONTENT_TYPE) {
        None => {
            tracing::error!("no Content-Type specified");
            Err(rejection())
        }
        Some(value) if value.as_bytes() == expected.as_bytes() => Ok(()),
        Some(value) => {
            tracing::error!(content_type = ?value, "invalid Content-Type");
            Err(rejection())
        }
    }
}

fn parse_payload(body: &[u8]) -> Result<AccountPayload, ApiError> {
    AccountPayload::from_json(body).map_err(|e| {
        tracing::error!(error = %e, "error deserializing account");
        ApiError::BadRequest(e.to_string())
    })
}

/// POST /accounts — create an account from a JSON body.
#[tracing::instrument(skip(state, headers, body))]
pub async fn create<S: AccountStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Account>), ApiError> {
    tracing::info!("request to create an account");
    check_content_type(&headers, JSON_CONTENT_TYPE)?;
    let payload = parse_payload(&body)?;

    let account = state.store.create(NewAccount::from(payload)).await?;
    metrics::counter!("accounts_created_total").increment(1);
    tracing::info!(id = %account.id, "account created");

    let location = format!("/accounts/{}", account.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(account),
    ))
}

/// GET /accounts/:id — read a single account.
#[tracing::instrument(skip(state))]
pub async fn get<S: AccountStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    AccountPath(id): AccountPath,
) -> Result<Json<Account>, ApiError> {
    let account = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| ApiError::account_not_found(id))?;

    tracing::debug!(name = %account.name, "returning account");
    Ok(Json(account))
}

/// GET /accounts — list every account.
#[tracing::instrument(skip(state))]
pub async fn list<S: AccountStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Account>>, ApiError> {
    let accounts = state.store.all().await?;
    tracing::info!(count = accounts.len(), "returning accounts");
    Ok(Json(accounts))
}

/// PUT /accounts/:id — replace an account's fields.
///
/// Unlike create, the content type is not checked here.
#[tracing::instrument(skip(state, body))]
pub async fn update<S: AccountStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    AccountPath(id): AccountPath,
    body: Bytes,
) -> Result<Json<Account>, ApiError> {
    let mut account = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| ApiError::account_not_found(id))?;

    account.apply(parse_payload(&body)?);
    let account = state.store.update(account).await?;
    metrics::counter!("accounts_updated_total").increment(1);
    tracing::info!("account updated");

    Ok(Json(account))
}

/// DELETE /accounts/:id — remove an account. Missing ids still succeed.
#[tracing::instrument(skip(state))]
pub async fn delete<S: AccountStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    AccountPath(id): AccountPath,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(id).await? {
        metrics::counter!("accounts_deleted_total").increment(1);
        tracing::info!("account deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}
