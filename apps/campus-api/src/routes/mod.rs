//! API routes

pub mod course;
pub mod enrollment;
pub mod student;

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::{
        CountResponse, CourseRequest, CourseResponse, EnrollmentRequest, EnrollmentResponse,
        ErrorResponse, StudentRequest, StudentResponse,
    },
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::student::create_student,
        handlers::student::list_students,
        handlers::student::get_student,
        handlers::student::get_student_by_email,
        handlers::student::update_student,
        handlers::student::delete_student,
        handlers::student::search_students,
        handlers::student::get_students_enrolled_between,
        handlers::course::create_course,
        handlers::course::list_courses,
        handlers::course::get_course,
        handlers::course::get_course_by_code,
        handlers::course::update_course,
        handlers::course::delete_course,
        handlers::course::search_courses,
        handlers::course::get_courses_by_instructor,
        handlers::course::get_courses_by_credits,
        handlers::enrollment::enroll_student,
        handlers::enrollment::list_enrollments,
        handlers::enrollment::get_enrollment,
        handlers::enrollment::delete_enrollment,
        handlers::enrollment::get_enrollments_by_student,
        handlers::enrollment::get_active_enrollments_by_student,
        handlers::enrollment::count_enrollments_by_student,
        handlers::enrollment::get_enrollments_by_course,
        handlers::enrollment::count_enrollments_by_course,
        handlers::enrollment::get_enrollments_by_status,
        handlers::enrollment::get_enrollment_for,
        handlers::enrollment::get_enrollments_between,
        handlers::enrollment::update_grade,
        handlers::enrollment::update_status,
        health_handler
    ),
    components(
        schemas(
            StudentRequest,
            StudentResponse,
            CourseRequest,
            CourseResponse,
            EnrollmentRequest,
            EnrollmentResponse,
            CountResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "students", description = "Student registry"),
        (name = "courses", description = "Course catalog"),
        (name = "enrollments", description = "Enrollments linking students to courses"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Campus API",
        version = "0.1.0",
        description = "Student, course and enrollment registry",
        contact(
            name = "Campus Registry Contributors"
        )
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(student::routes())
        .merge(course::routes())
        .merge(enrollment::routes())
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}
