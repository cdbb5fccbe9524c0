use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub fn handle_panic(production: bool, err: Box<dyn Any + Send + 'static>) -> Response {
    let body = if production {
        serde_json::json!({ "error": { "kind": "panic", "message": "Server error" } })
    } else {
        let details = if let Some(s) = err.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic message".to_string()
        };

        serde_json::json!({
            "error": {
                "kind": "panic",
                "message": details,
            }
        })
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
