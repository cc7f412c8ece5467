//! Course handlers

use axum::{extract::State, http::StatusCode, Json};
use campus_domain::CourseId;
use tracing::info;

use super::{to_responses, ApiResult};
use crate::{
    dto::{CourseRequest, CourseResponse, ErrorResponse, SearchQuery},
    extract::{ApiJson, ApiPath, ApiQuery},
    validation::{require_term, validate_course},
    AppState,
};

/// Create a course
///
/// The code must be 2-4 uppercase letters followed by 3 digits and unique;
/// credits must be within 1..=6.
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Invalid course data", body = ErrorResponse),
        (status = 409, description = "Course code already exists", body = ErrorResponse)
    ),
    tag = "courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CourseRequest>,
) -> ApiResult<(StatusCode, Json<CourseResponse>)> {
    info!(code = %request.course_code, "Received create course request");
    validate_course(&request)?;

    let course = state.courses.create_course(request.into()).await?;
    Ok((StatusCode::CREATED, Json(CourseResponse::from(&course))))
}

#[utoipa::path(
    get,
    path = "/api/courses",
    responses((status = 200, description = "All courses in insertion order", body = [CourseResponse])),
    tag = "courses"
)]
pub async fn list_courses(State(state): State<AppState>) -> ApiResult<Json<Vec<CourseResponse>>> {
    let courses = state.courses.list_courses().await?;
    Ok(Json(to_responses(&courses)))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<CourseResponse>> {
    let course = state.courses.get_course_by_id(CourseId::new(id)).await?;
    Ok(Json(CourseResponse::from(&course)))
}

#[utoipa::path(
    get,
    path = "/api/courses/code/{code}",
    params(("code" = String, Path, description = "Course code, e.g. CS101")),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "No course with this code", body = ErrorResponse)
    ),
    tag = "courses"
)]
pub async fn get_course_by_code(
    State(state): State<AppState>,
    ApiPath(code): ApiPath<String>,
) -> ApiResult<Json<CourseResponse>> {
    let course = state.courses.get_course_by_code(&code).await?;
    Ok(Json(CourseResponse::from(&course)))
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course id")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 400, description = "Invalid course data", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 409, description = "Course code already exists", body = ErrorResponse)
    ),
    tag = "courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<CourseRequest>,
) -> ApiResult<Json<CourseResponse>> {
    info!(course_id = id, "Received update course request");
    validate_course(&request)?;

    let course = state
        .courses
        .update_course(CourseId::new(id), request.into())
        .await?;
    Ok(Json(CourseResponse::from(&course)))
}

/// Delete a course together with all of its enrollments
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course id")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    info!(course_id = id, "Received delete course request");
    state.courses.delete_course(CourseId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/courses/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Courses whose name matches", body = [CourseResponse]),
        (status = 400, description = "Blank search term", body = ErrorResponse)
    ),
    tag = "courses"
)]
pub async fn search_courses(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    require_term("name", &query.name)?;
    let courses = state.courses.search_courses_by_name(&query.name).await?;
    Ok(Json(to_responses(&courses)))
}

#[utoipa::path(
    get,
    path = "/api/courses/instructor/{instructor}",
    params(("instructor" = String, Path, description = "Exact instructor name")),
    responses((status = 200, description = "Courses taught by the instructor", body = [CourseResponse])),
    tag = "courses"
)]
pub async fn get_courses_by_instructor(
    State(state): State<AppState>,
    ApiPath(instructor): ApiPath<String>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    require_term("instructor", &instructor)?;
    let courses = state.courses.get_courses_by_instructor(&instructor).await?;
    Ok(Json(to_responses(&courses)))
}

#[utoipa::path(
    get,
    path = "/api/courses/credits/{credits}",
    params(("credits" = i32, Path, description = "Credit value, 1 to 6")),
    responses(
        (status = 200, description = "Courses worth exactly this many credits", body = [CourseResponse]),
        (status = 400, description = "Credits out of range", body = ErrorResponse)
    ),
    tag = "courses"
)]
pub async fn get_courses_by_credits(
    State(state): State<AppState>,
    ApiPath(credits): ApiPath<i32>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let courses = state.courses.get_courses_by_credits(credits).await?;
    Ok(Json(to_responses(&courses)))
}
