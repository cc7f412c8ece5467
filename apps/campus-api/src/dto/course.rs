//! Course DTOs

use campus_domain::{Course, CourseInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/courses` and `PUT /api/courses/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    #[schema(example = "Intro to CS")]
    pub course_name: String,
    #[schema(example = "CS101")]
    pub course_code: String,
    #[schema(example = 3, minimum = 1, maximum = 6)]
    pub credits: i32,
    #[schema(example = "Dr. Hopper")]
    pub instructor: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CourseRequest> for CourseInput {
    fn from(request: CourseRequest) -> Self {
        Self {
            name: request.course_name,
            code: request.course_code,
            credits: request.credits,
            instructor: request.instructor,
            description: request.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub course_name: String,
    pub course_code: String,
    pub credits: i32,
    pub instructor: String,
    pub description: Option<String>,
}

impl From<&Course> for CourseResponse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().value(),
            course_name: course.name().to_string(),
            course_code: course.code().to_string(),
            credits: course.credits(),
            instructor: course.instructor().to_string(),
            description: course.description().map(str::to_string),
        }
    }
}
