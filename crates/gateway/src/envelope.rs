//! The uniform response envelope every relay operation answers with.
//!
//! Success is HTTP 200 with the provider payload's fields at top level and
//! `isError: false`; any failure is HTTP 500 with `isError: true`, a
//! message, and (for provider errors) a machine-readable code. This module
//! is the only place the wire shape exists.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use provgate_types::RelayError;
use serde_json::{Map, Value, json};

/// A provider payload relayed to the caller unaltered.
pub struct Relayed(pub Value);

impl IntoResponse for Relayed {
    fn into_response(self) -> Response {
        let mut body = match self.0 {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        // Result always wins over any `isError` key the payload carried.
        body.insert("isError".to_string(), Value::Bool(false));
        Json(Value::Object(body)).into_response()
    }
}

/// Wrapper around [`RelayError`] that emits the error envelope.
pub struct ApiError(pub RelayError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "isError": true,
            "errorMessage": self.0.to_string(),
        });
        if let Some(code) = self.0.error_code() {
            body["errorCode"] = Value::String(code);
        }
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<RelayError> for ApiError {
    fn from(e: RelayError) -> Self {
        Self(e)
    }
}
