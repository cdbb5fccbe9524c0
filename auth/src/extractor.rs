use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{error::Error, extract_header::extract_api_key};

/// Extracts the API key from the `Authorization` header, rejecting the request
/// when the header is missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyHeader(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ApiKeyHeader
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_api_key(&parts.headers).map(ApiKeyHeader)
    }
}

/// Like [ApiKeyHeader], but a request with no `Authorization` header comes
/// through as `None` so the handler can serve it anonymously. A malformed
/// header is still rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalApiKeyHeader(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalApiKeyHeader
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match extract_api_key(&parts.headers) {
            Ok(key) => Ok(OptionalApiKeyHeader(Some(key))),
            Err(Error::NoAuthHeader) => Ok(OptionalApiKeyHeader(None)),
            Err(e) => Err(e),
        }
    }
}
