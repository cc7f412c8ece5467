//! Student DTOs

use campus_domain::{Student, StudentInput};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/students` and `PUT /api/students/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.edu")]
    pub email: String,
    #[schema(example = "5551234567")]
    pub phone: String,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "2001-12-10")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub address: Option<String>,
    /// Defaults to today when omitted on create; ignored on update
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "2024-09-02")]
    pub enrollment_date: Option<NaiveDate>,
}

impl From<StudentRequest> for StudentInput {
    fn from(request: StudentRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            date_of_birth: request.date_of_birth,
            address: request.address,
            enrollment_date: request.enrollment_date,
        }
    }
}

/// A stored student
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[schema(value_type = Option<String>)]
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    #[schema(value_type = String)]
    pub enrollment_date: NaiveDate,
}

impl From<&Student> for StudentResponse {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id().value(),
            first_name: student.first_name().to_string(),
            last_name: student.last_name().to_string(),
            full_name: student.full_name(),
            email: student.email().to_string(),
            phone: student.phone().to_string(),
            date_of_birth: student.date_of_birth(),
            address: student.address().map(str::to_string),
            enrollment_date: student.enrollment_date(),
        }
    }
}
