//! Request extraction with API-shaped errors.
//!
//! The framework's default rejections are plain text; these wrappers turn
//! every rejection into an [`AppError`] so clients always get the JSON
//! error envelope.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// JSON body extractor that tolerates an empty body.
///
/// An empty (or whitespace-only) body yields `T::default()`, so required
/// fields are reported by the operation itself. Malformed JSON is rejected
/// as an [`AppError::Validation`] rather than the framework's default
/// rejection. The `Content-Type` header is not inspected.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            AppError::bad_request("Invalid JSON body", json!({ "reason": e.to_string() }))
        })
    }
}

/// Query string extractor.
///
/// Undecodable query strings (duplicate keys, bad percent-encoding) are
/// rejected as [`AppError::Validation`].
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::bad_request("Invalid query string", json!({ "reason": e.body_text() }))
            })?;

        Ok(Self(value))
    }
}

/// Raw `{id}` path segment of a user route.
///
/// Segments the router cannot decode (for example invalid UTF-8) cannot
/// name any user, so they are reported as not found, the same as any other
/// malformed id.
#[derive(Debug)]
pub struct UserIdPath(pub String);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(e) => {
                tracing::debug!(reason = %e.body_text(), "Undecodable user id");
                Err(AppError::not_found("User not found", json!({})))
            }
        }
    }
}
