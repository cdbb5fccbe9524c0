use axum::{http::HeaderMap, routing::get, Json, Router};
use serde::Serialize;
use tracing::{event, Level};

use apikey_auth::{extract_api_key, OptionalApiKeyHeader};

use crate::Result;

#[derive(Debug, Serialize)]
struct WhoAmIResponse {
    anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_length: Option<usize>,
}

/// Reports whether the caller offered a key. The key itself is never echoed back.
async fn whoami(OptionalApiKeyHeader(key): OptionalApiKeyHeader) -> Json<WhoAmIResponse> {
    let key_length = key.as_ref().map(|k| k.len());
    event!(Level::DEBUG, anonymous = key.is_none(), ?key_length, "whoami");
    Json(WhoAmIResponse {
        anonymous: key.is_none(),
        key_length,
    })
}

#[derive(Debug, Serialize)]
struct ProtectedResponse {
    ok: bool,
}

async fn protected(headers: HeaderMap) -> Result<Json<ProtectedResponse>> {
    let key = extract_api_key(&headers)?;
    event!(Level::DEBUG, key_length = key.len(), "accepted api key");
    Ok(Json(ProtectedResponse { ok: true }))
}

pub fn configure() -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .route("/protected", get(protected))
}
