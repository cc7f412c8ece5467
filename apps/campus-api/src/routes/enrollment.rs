//! Enrollment routes

use axum::{
    routing::{get, patch},
    Router,
};

use crate::{handlers::enrollment, AppState};

/// Create enrollment routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/enrollments",
            get(enrollment::list_enrollments).post(enrollment::enroll_student),
        )
        .route("/api/enrollments/lookup", get(enrollment::get_enrollment_for))
        .route(
            "/api/enrollments/between",
            get(enrollment::get_enrollments_between),
        )
        .route(
            "/api/enrollments/status/:status",
            get(enrollment::get_enrollments_by_status),
        )
        .route(
            "/api/enrollments/student/:student_id",
            get(enrollment::get_enrollments_by_student),
        )
        .route(
            "/api/enrollments/student/:student_id/active",
            get(enrollment::get_active_enrollments_by_student),
        )
        .route(
            "/api/enrollments/student/:student_id/count",
            get(enrollment::count_enrollments_by_student),
        )
        .route(
            "/api/enrollments/course/:course_id",
            get(enrollment::get_enrollments_by_course),
        )
        .route(
            "/api/enrollments/course/:course_id/count",
            get(enrollment::count_enrollments_by_course),
        )
        .route(
            "/api/enrollments/:id",
            get(enrollment::get_enrollment).delete(enrollment::delete_enrollment),
        )
        .route("/api/enrollments/:id/grade", patch(enrollment::update_grade))
        .route("/api/enrollments/:id/status", patch(enrollment::update_status))
}
