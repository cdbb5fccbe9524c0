use serde::Serialize;
use std::borrow::Cow;
use tracing::{event, Level};

/// The JSON body returned with every error response, shaped as
/// `{ "error": { "kind": ..., "message": ... } }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponseData {
    error: ErrorDetails,
}

#[derive(Debug, Serialize)]
struct ErrorDetails {
    kind: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl ErrorResponseData {
    /// Build an error body for a server-side failure. This is logged at `ERROR`.
    pub fn new(
        kind: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> ErrorResponseData {
        let ret = Self::build(kind, message);
        event!(Level::ERROR, kind=%ret.error.kind, message=%ret.error.message);
        ret
    }

    /// Build an error body for a request the client got wrong, such as bad
    /// credentials. These are expected traffic, so they only log at `INFO`.
    pub fn client(
        kind: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> ErrorResponseData {
        let ret = Self::build(kind, message);
        event!(Level::INFO, kind=%ret.error.kind, message=%ret.error.message);
        ret
    }

    fn build(
        kind: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> ErrorResponseData {
        ErrorResponseData {
            error: ErrorDetails {
                kind: kind.into(),
                message: message.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorResponseData;

    #[test]
    fn serializes_nested_error() {
        let data = ErrorResponseData::client("no_auth_header", "no authorization header included");
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "error": {
                    "kind": "no_auth_header",
                    "message": "no authorization header included",
                }
            })
        );
    }

    #[test]
    fn accepts_owned_messages() {
        let data = ErrorResponseData::new("internal_server_error", format!("code {}", 7));
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["error"]["kind"], "internal_server_error");
        assert_eq!(value["error"]["message"], "code 7");
    }
}
