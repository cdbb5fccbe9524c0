use axum::http::{header::AUTHORIZATION, HeaderMap};
use tracing::{event, Level};

use crate::error::{Error, Result};

/// The scheme tag that must lead the Authorization header value.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Pull the API key out of an `Authorization: ApiKey <key>` header.
///
/// The value is split on single spaces and the second piece is returned as-is,
/// so `"ApiKey  key"` yields an empty key and anything after the second piece
/// is ignored. The scheme tag is matched case-sensitively.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(Error::NoAuthHeader),
    };

    let mut parts = value.as_bytes().split(|b| *b == b' ');
    if parts.next() != Some(API_KEY_SCHEME.as_bytes()) {
        event!(Level::DEBUG, "authorization header has the wrong scheme");
        return Err(Error::MalformedHeader);
    }

    let key = parts.next().ok_or_else(|| {
        event!(Level::DEBUG, "authorization header has no key");
        Error::MalformedHeader
    })?;

    // Header values may carry non-ASCII bytes; only the key itself must be UTF-8.
    String::from_utf8(key.to_vec()).map_err(|_| {
        event!(Level::DEBUG, "api key is not valid UTF-8");
        Error::MalformedHeader
    })
}
