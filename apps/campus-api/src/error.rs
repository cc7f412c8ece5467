//! Mapping of domain and request failures onto HTTP responses

use std::collections::BTreeMap;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use campus_domain::CampusError;
use chrono::Utc;
use tracing::{error, warn};

use crate::dto::ErrorResponse;

/// Field name to message, ordered for stable output
pub type FieldErrors = BTreeMap<String, String>;

/// Every way a request can fail
#[derive(Debug)]
pub enum ApiError {
    /// Failure reported by a domain service
    Domain(CampusError),
    /// One or more fields failed shape validation
    Validation(FieldErrors),
    /// The request could not be decoded (body, path or query)
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Domain(CampusError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Domain(CampusError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Domain(CampusError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Self::Domain(CampusError::StorageFailure(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Domain(err @ CampusError::NotFound { .. }) => err.to_string(),
            Self::Domain(CampusError::Conflict(msg)) | Self::Domain(CampusError::InvalidInput(msg)) => {
                msg.clone()
            }
            Self::Domain(CampusError::StorageFailure(_)) => {
                "An unexpected error occurred".to_string()
            }
            Self::Validation(_) => "Validation failed".to_string(),
            Self::BadRequest(msg) => msg.clone(),
        }
    }
}

impl From<CampusError> for ApiError {
    fn from(err: CampusError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            error!(error = ?self, "Request failed");
        } else {
            warn!(status = status.as_u16(), message = %message, "Request rejected");
        }

        let validation_errors = match self {
            Self::Validation(fields) => Some(fields),
            _ => None,
        };

        let body = ErrorResponse {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
            validation_errors,
        };

        (status, Json(body)).into_response()
    }
}
