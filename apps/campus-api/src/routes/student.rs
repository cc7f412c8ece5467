//! Student routes

use axum::{routing::get, Router};

use crate::{handlers::student, AppState};

/// Create student routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/students",
            get(student::list_students).post(student::create_student),
        )
        .route("/api/students/search", get(student::search_students))
        .route(
            "/api/students/enrolled",
            get(student::get_students_enrolled_between),
        )
        .route(
            "/api/students/email/:email",
            get(student::get_student_by_email),
        )
        .route(
            "/api/students/:id",
            get(student::get_student)
                .put(student::update_student)
                .delete(student::delete_student),
        )
}
