use crate::config::ConfigError;
use crate::revenue::RevenueLossError;
use crate::telemetry::TelemetryError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Calculation(RevenueLossError),
    Request(JsonRejection),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Calculation(RevenueLossError::InvalidInput { .. }) | AppError::Request(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Calculation(RevenueLossError::DivisionUndefined { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Calculation(err) => write!(f, "calculation error: {}", err),
            AppError::Request(err) => write!(f, "invalid request body: {}", err.body_text()),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Calculation(err) => Some(err),
            AppError::Request(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::Calculation(err) => Json(json!({
                "error": self.to_string(),
                "kind": err.label_key(),
            })),
            AppError::Request(_) => Json(json!({
                "error": self.to_string(),
                "kind": "error_invalid_input",
            })),
            _ => Json(json!({ "error": self.to_string() })),
        };
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        Self::Request(value)
    }
}

impl From<RevenueLossError> for AppError {
    fn from(value: RevenueLossError) -> Self {
        Self::Calculation(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_errors_map_to_client_statuses() {
        let invalid = AppError::from(RevenueLossError::InvalidInput {
            field: "unit_count",
            reason: "must be positive".to_string(),
        });
        let undefined = AppError::from(RevenueLossError::DivisionUndefined {
            quantity: "percentage_loss",
        });
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(undefined.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            AppError::from(ConfigError::InvalidPort).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
