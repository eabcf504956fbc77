use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use opentime_core::RegistryError;
use serde::Serialize;
use thiserror::Error;

/// Static error code returned for unknown window ids.
pub const PARAMETER_NOT_FOUND: &str = "Parameter not found";

/// User-facing not-found message; always contains `parameter`.
pub fn not_found_message(parameter: &str) -> String {
    format!("設定が見つかりません: {parameter}")
}

/// Error surface for server bootstrap and runtime.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("server I/O error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// Handler error, rendered as a JSON body.
#[derive(Debug)]
pub struct ApiError(pub RegistryError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            RegistryError::NotFound { id } => {
                tracing::debug!(parameter = %id, "unknown window requested");
                let body = ErrorBody {
                    error: PARAMETER_NOT_FOUND,
                    message: not_found_message(&id),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                let body = ErrorBody {
                    error: "Internal server error",
                    message: other.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        ApiError(err)
    }
}
