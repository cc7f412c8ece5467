//! Course routes

use axum::{routing::get, Router};

use crate::{handlers::course, AppState};

/// Create course routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/courses",
            get(course::list_courses).post(course::create_course),
        )
        .route("/api/courses/search", get(course::search_courses))
        .route("/api/courses/code/:code", get(course::get_course_by_code))
        .route(
            "/api/courses/instructor/:instructor",
            get(course::get_courses_by_instructor),
        )
        .route(
            "/api/courses/credits/:credits",
            get(course::get_courses_by_credits),
        )
        .route(
            "/api/courses/:id",
            get(course::get_course)
                .put(course::update_course)
                .delete(course::delete_course),
        )
}
