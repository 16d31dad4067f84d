use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::domain::ColorError;

/// Gateway-wide error model for uniform HTTP/JSON mapping.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid {field} {value:?} (use #RRGGBB or #RGB)")]
    InvalidFormat { field: &'static str, value: String },
    #[error("unsupported mode: {0:?}")]
    UnsupportedScheme(String),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("tool not found: {0}")]
    UnknownTool(String),
    #[error("{0}")]
    Message(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidFormat { .. }
            | GatewayError::UnsupportedScheme(_)
            | GatewayError::MissingField(_) => StatusCode::BAD_REQUEST,
            GatewayError::UnknownTool(_) => StatusCode::NOT_FOUND,
            GatewayError::Message(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON-RPC code: -32602 for caller mistakes, -32000 otherwise.
    pub fn rpc_code(&self) -> i32 {
        if self.status() == StatusCode::BAD_REQUEST {
            -32602
        } else {
            -32000
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

impl From<ColorError> for GatewayError {
    fn from(e: ColorError) -> Self {
        match e {
            ColorError::InvalidFormat(value) => GatewayError::InvalidFormat {
                field: "base_color",
                value,
            },
            ColorError::UnsupportedScheme(mode) => GatewayError::UnsupportedScheme(mode),
        }
    }
}

impl From<anyhow::Error> for GatewayError {
    fn from(e: anyhow::Error) -> Self {
        GatewayError::Message(e.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}
