//! Shapes shared by every resource

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Error body returned for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    #[schema(example = 404)]
    pub status: u16,
    #[schema(example = "Not Found")]
    pub error: String,
    #[schema(example = "Student not found with ID: 42")]
    pub message: String,
    /// Per-field messages, present only for shape validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<BTreeMap<String, String>>,
}

/// Result of a counting query
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    #[schema(example = 3)]
    pub count: u64,
}

/// `?name=` search term
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring to look for
    pub name: String,
}

/// Inclusive `?from=&to=` date range
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    #[param(value_type = String, example = "2024-09-01")]
    pub from: NaiveDate,
    #[param(value_type = String, example = "2024-12-31")]
    pub to: NaiveDate,
}
