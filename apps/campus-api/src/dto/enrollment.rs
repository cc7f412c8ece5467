//! Enrollment DTOs

use campus_domain::EnrollmentDetails;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Body of `POST /api/enrollments`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequest {
    #[schema(example = 1)]
    pub student_id: i64,
    #[schema(example = 1)]
    pub course_id: i64,
}

/// A stored enrollment with the names of the student and course it links
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentResponse {
    pub id: i64,
    pub student_id: i64,
    #[schema(example = "Ada Lovelace")]
    pub student_name: String,
    pub course_id: i64,
    #[schema(example = "Intro to CS")]
    pub course_name: String,
    #[schema(example = "CS101")]
    pub course_code: String,
    #[schema(value_type = String, example = "2024-09-02")]
    pub enrollment_date: NaiveDate,
    #[schema(example = "A-")]
    pub grade: Option<String>,
    #[schema(example = "ACTIVE")]
    pub status: String,
}

impl From<&EnrollmentDetails> for EnrollmentResponse {
    fn from(details: &EnrollmentDetails) -> Self {
        let enrollment = &details.enrollment;
        Self {
            id: enrollment.id().value(),
            student_id: enrollment.student_id().value(),
            student_name: details.student_name.clone(),
            course_id: enrollment.course_id().value(),
            course_name: details.course_name.clone(),
            course_code: details.course_code.clone(),
            enrollment_date: enrollment.enrollment_date(),
            grade: enrollment.grade().map(str::to_string),
            status: enrollment.status().as_str().to_string(),
        }
    }
}

/// `?grade=` for `PATCH /api/enrollments/{id}/grade`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GradeQuery {
    #[param(example = "B+")]
    pub grade: String,
}

/// `?status=` for `PATCH /api/enrollments/{id}/status`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusQuery {
    /// One of `ACTIVE`, `COMPLETED`, `DROPPED`
    #[param(example = "COMPLETED")]
    pub status: String,
}

/// `?studentId=&courseId=` for `GET /api/enrollments/lookup`
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PairQuery {
    pub student_id: i64,
    pub course_id: i64,
}
