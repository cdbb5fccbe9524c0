use apikey_http_errors::ErrorResponseData;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The Authorization header was absent or empty. Callers that allow
    /// anonymous access should treat this as "no credential offered".
    #[error("no authorization header included")]
    NoAuthHeader,

    /// The header is present but is not of the form `ApiKey <key>`.
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl Error {
    fn error_kind(&self) -> &'static str {
        match self {
            Error::NoAuthHeader => "no_auth_header",
            Error::MalformedHeader => "malformed_header",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NoAuthHeader => StatusCode::UNAUTHORIZED,
            Error::MalformedHeader => StatusCode::BAD_REQUEST,
        }
    }

    pub fn response_tuple(&self) -> (StatusCode, ErrorResponseData) {
        (
            self.status_code(),
            ErrorResponseData::client(self.error_kind(), self.to_string()),
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (code, json) = self.response_tuple();
        (code, Json(json)).into_response()
    }
}
