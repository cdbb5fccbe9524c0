use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use apikey_http_errors::ErrorResponseData;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Server error: {0}")]
    ServerError(#[from] hyper::Error),

    #[error("Invalid bind address: {0}")]
    BindAddress(#[from] std::net::AddrParseError),

    #[error("Auth error: {0}")]
    AuthError(#[from] apikey_auth::Error),

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    fn error_kind(&self) -> &'static str {
        match self {
            Error::ServerError(_) => "internal_server_error",
            Error::BindAddress(_) => "internal_server_error",
            Error::AuthError(_) => "authn",
            Error::IoError(_) => "internal_server_error",
        }
    }

    pub fn response_tuple(&self) -> (StatusCode, ErrorResponseData) {
        match self {
            Error::AuthError(e) => e.response_tuple(),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponseData::new(self.error_kind(), self.to_string()),
            ),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (code, json) = self.response_tuple();
        (code, Json(json)).into_response()
    }
}
