use crate::cliente_actor::ClienteError;
use crate::validation::ValidationError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

/// Everything a handler can fail with, mapped to a status code and a JSON body
/// of the form `{"error": <kind>, "message": <text>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Cliente(#[from] ClienteError),

    /// Malformed body or path that never reached validation.
    #[error("{0}")]
    BadRequest(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Cliente(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Cliente(err) => match err {
                ClienteError::Validation(_) | ClienteError::Underage { .. } => StatusCode::BAD_REQUEST,
                ClienteError::AlreadyExists(_) => StatusCode::CONFLICT,
                ClienteError::NotFound(_) | ClienteError::NoneRegistered => StatusCode::NOT_FOUND,
                ClienteError::ActorCommunicationError(_) => StatusCode::SERVICE_UNAVAILABLE,
            },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Cliente(err) => match err {
                ClienteError::Validation(_) => "validation_error",
                ClienteError::Underage { .. } => "underage",
                ClienteError::AlreadyExists(_) => "already_exists",
                ClienteError::NotFound(_) | ClienteError::NoneRegistered => "not_found",
                ClienteError::ActorCommunicationError(_) => "unavailable",
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(%status, error = %self, "Request failed");
        } else {
            debug!(%status, error = %self, "Request rejected");
        }
        let body = json!({
            "error": self.kind(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
