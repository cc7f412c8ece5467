//! Student handlers

use axum::{extract::State, http::StatusCode, Json};
use campus_domain::StudentId;
use tracing::info;

use super::{to_responses, ApiResult};
use crate::{
    dto::{DateRangeQuery, ErrorResponse, SearchQuery, StudentRequest, StudentResponse},
    extract::{ApiJson, ApiPath, ApiQuery},
    validation::{require_term, validate_student},
    AppState,
};

/// Register a new student
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = StudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Invalid student data", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<StudentRequest>,
) -> ApiResult<(StatusCode, Json<StudentResponse>)> {
    info!(email = %request.email, "Received create student request");
    validate_student(&request)?;

    let student = state.students.create_student(request.into()).await?;
    Ok((StatusCode::CREATED, Json(StudentResponse::from(&student))))
}

#[utoipa::path(
    get,
    path = "/api/students",
    responses((status = 200, description = "All students in insertion order", body = [StudentResponse])),
    tag = "students"
)]
pub async fn list_students(State(state): State<AppState>) -> ApiResult<Json<Vec<StudentResponse>>> {
    let students = state.students.list_students().await?;
    Ok(Json(to_responses(&students)))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn get_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<StudentResponse>> {
    let student = state.students.get_student_by_id(StudentId::new(id)).await?;
    Ok(Json(StudentResponse::from(&student)))
}

#[utoipa::path(
    get,
    path = "/api/students/email/{email}",
    params(("email" = String, Path, description = "Exact, case-sensitive email")),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "No student with this email", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn get_student_by_email(
    State(state): State<AppState>,
    ApiPath(email): ApiPath<String>,
) -> ApiResult<Json<StudentResponse>> {
    let student = state.students.get_student_by_email(&email).await?;
    Ok(Json(StudentResponse::from(&student)))
}

/// Replace a student's editable fields
///
/// The id and original enrollment date are kept.
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student id")),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 400, description = "Invalid student data", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn update_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<StudentRequest>,
) -> ApiResult<Json<StudentResponse>> {
    info!(student_id = id, "Received update student request");
    validate_student(&request)?;

    let student = state
        .students
        .update_student(StudentId::new(id), request.into())
        .await?;
    Ok(Json(StudentResponse::from(&student)))
}

/// Delete a student together with all of their enrollments
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    info!(student_id = id, "Received delete student request");
    state.students.delete_student(StudentId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/students/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Students whose first or last name matches", body = [StudentResponse]),
        (status = 400, description = "Blank search term", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn search_students(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> ApiResult<Json<Vec<StudentResponse>>> {
    require_term("name", &query.name)?;
    let students = state.students.search_students_by_name(&query.name).await?;
    Ok(Json(to_responses(&students)))
}

#[utoipa::path(
    get,
    path = "/api/students/enrolled",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Students enrolled within the range, inclusive", body = [StudentResponse]),
        (status = 400, description = "Start date after end date", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn get_students_enrolled_between(
    State(state): State<AppState>,
    ApiQuery(range): ApiQuery<DateRangeQuery>,
) -> ApiResult<Json<Vec<StudentResponse>>> {
    let students = state
        .students
        .get_students_enrolled_between(range.from, range.to)
        .await?;
    Ok(Json(to_responses(&students)))
}
