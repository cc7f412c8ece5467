//! Enrollment handlers

use axum::{extract::State, http::StatusCode, Json};
use campus_domain::{CourseId, EnrollmentId, EnrollmentStatus, StudentId};
use tracing::info;

use super::{to_responses, ApiResult};
use crate::{
    dto::{
        CountResponse, DateRangeQuery, EnrollmentRequest, EnrollmentResponse, ErrorResponse,
        GradeQuery, PairQuery, StatusQuery,
    },
    extract::{ApiJson, ApiPath, ApiQuery},
    validation::validate_grade,
    AppState,
};

/// Enroll a student in a course
///
/// The enrollment starts `ACTIVE`, dated today, without a grade.
#[utoipa::path(
    post,
    path = "/api/enrollments",
    request_body = EnrollmentRequest,
    responses(
        (status = 201, description = "Enrollment created", body = EnrollmentResponse),
        (status = 404, description = "Student or course not found", body = ErrorResponse),
        (status = 409, description = "Student already enrolled in the course", body = ErrorResponse)
    ),
    tag = "enrollments"
)]
pub async fn enroll_student(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<EnrollmentRequest>,
) -> ApiResult<(StatusCode, Json<EnrollmentResponse>)> {
    info!(
        student_id = request.student_id,
        course_id = request.course_id,
        "Received enrollment request"
    );

    let enrollment = state
        .enrollments
        .enroll_student(
            StudentId::new(request.student_id),
            CourseId::new(request.course_id),
        )
        .await?;
    let details = state.enrollments.details_of(enrollment).await?;
    Ok((StatusCode::CREATED, Json(EnrollmentResponse::from(&details))))
}

#[utoipa::path(
    get,
    path = "/api/enrollments",
    responses((status = 200, description = "All enrollments in insertion order", body = [EnrollmentResponse])),
    tag = "enrollments"
)]
pub async fn list_enrollments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<EnrollmentResponse>>> {
    let enrollments = state.enrollments.list_enrollments().await?;
    let details = state.enrollments.with_details(enrollments).await?;
    Ok(Json(to_responses(&details)))
}

#[utoipa::path(
    get,
    path = "/api/enrollments/{id}",
    params(("id" = i64, Path, description = "Enrollment id")),
    responses(
        (status = 200, description = "Enrollment found", body = EnrollmentResponse),
        (status = 404, description = "Enrollment not found", body = ErrorResponse)
    ),
    tag = "enrollments"
)]
pub async fn get_enrollment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<EnrollmentResponse>> {
    let enrollment = state
        .enrollments
        .get_enrollment_by_id(EnrollmentId::new(id))
        .await?;
    let details = state.enrollments.details_of(enrollment).await?;
    Ok(Json(EnrollmentResponse::from(&details)))
}

#[utoipa::path(
    delete,
    path = "/api/enrollments/{id}",
    params(("id" = i64, Path, description = "Enrollment id")),
    responses(
        (status = 204, description = "Enrollment deleted"),
        (status = 404, description = "Enrollment not found", body = ErrorResponse)
    ),
    tag = "enrollments"
)]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    info!(enrollment_id = id, "Received delete enrollment request");
    state
        .enrollments
        .delete_enrollment(EnrollmentId::new(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/enrollments/student/{student_id}",
    params(("student_id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Enrollments of the student", body = [EnrollmentResponse]),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "enrollments"
)]
pub async fn get_enrollments_by_student(
    State(state): State<AppState>,
    ApiPath(student_id): ApiPath<i64>,
) -> ApiResult<Json<Vec<EnrollmentResponse>>> {
    let enrollments = state
        .enrollments
        .get_enrollments_by_student(StudentId::new(student_id))
        .await?;
    let details = state.enrollments.with_details(enrollments).await?;
    Ok(Json(to_responses(&details)))
}

#[utoipa::path(
    get,
    path = "/api/enrollments/student/{student_id}/active",
    params(("student_id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "ACTIVE enrollments of the student", body = [EnrollmentResponse]),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "enrollments"
)]
pub async fn get_active_enrollments_by_student(
    State(state): State<AppState>,
    ApiPath(student_id): ApiPath<i64>,
) -> ApiResult<Json<Vec<EnrollmentResponse>>> {
    let enrollments = state
        .enrollments
        .get_active_enrollments_by_student(StudentId::new(student_id))
        .await?;
    let details = state.enrollments.with_details(enrollments).await?;
    Ok(Json(to_responses(&details)))
}

#[utoipa::path(
    get,
    path = "/api/enrollments/student/{student_id}/count",
    params(("student_id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Number of enrollments of the student", body = CountResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "enrollments"
)]
pub async fn count_enrollments_by_student(
    State(state): State<AppState>,
    ApiPath(student_id): ApiPath<i64>,
) -> ApiResult<Json<CountResponse>> {
    let count = state
        .enrollments
        .count_enrollments_by_student(StudentId::new(student_id))
        .await?;
    Ok(Json(CountResponse { count }))
}

#[utoipa::path(
    get,
    path = "/api/enrollments/course/{course_id}",
    params(("course_id" = i64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Enrollments in the course", body = [EnrollmentResponse]),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "enrollments"
)]
pub async fn get_enrollments_by_course(
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i64>,
) -> ApiResult<Json<Vec<EnrollmentResponse>>> {
    let enrollments = state
        .enrollments
        .get_enrollments_by_course(CourseId::new(course_id))
        .await?;
    let details = state.enrollments.with_details(enrollments).await?;
    Ok(Json(to_responses(&details)))
}

#[utoipa::path(
    get,
    path = "/api/enrollments/course/{course_id}/count",
    params(("course_id" = i64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Number of enrollments in the course", body = CountResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "enrollments"
)]
pub async fn count_enrollments_by_course(
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i64>,
) -> ApiResult<Json<CountResponse>> {
    let count = state
        .enrollments
        .count_enrollments_by_course(CourseId::new(course_id))
        .await?;
    Ok(Json(CountResponse { count }))
}

#[utoipa::path(
    get,
    path = "/api/enrollments/status/{status}",
    params(("status" = String, Path, description = "ACTIVE, COMPLETED or DROPPED")),
    responses(
        (status = 200, description = "Enrollments with this status", body = [EnrollmentResponse]),
        (status = 400, description = "Unknown status", body = ErrorResponse)
    ),
    tag = "enrollments"
)]
pub async fn get_enrollments_by_status(
    State(state): State<AppState>,
    ApiPath(status): ApiPath<String>,
) -> ApiResult<Json<Vec<EnrollmentResponse>>> {
    let status: EnrollmentStatus = status.parse()?;
    let enrollments = state.enrollments.get_enrollments_by_status(status).await?;
    let details = state.enrollments.with_details(enrollments).await?;
    Ok(Json(to_responses(&details)))
}

#[utoipa::path(
    get,
    path = "/api/enrollments/lookup",
    params(PairQuery),
    responses(
        (status = 200, description = "The enrollment linking the pair", body = EnrollmentResponse),
        (status = 404, description = "Student, course or enrollment not found", body = ErrorResponse)
    ),
    tag = "enrollments"
)]
pub async fn get_enrollment_for(
    State(state): State<AppState>,
    ApiQuery(pair): ApiQuery<PairQuery>,
) -> ApiResult<Json<EnrollmentResponse>> {
    let enrollment = state
        .enrollments
        .get_enrollment_for(StudentId::new(pair.student_id), CourseId::new(pair.course_id))
        .await?;
    let details = state.enrollments.details_of(enrollment).await?;
    Ok(Json(EnrollmentResponse::from(&details)))
}

#[utoipa::path(
    get,
    path = "/api/enrollments/between",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Enrollments dated within the range, inclusive", body = [EnrollmentResponse]),
        (status = 400, description = "Start date after end date", body = ErrorResponse)
    ),
    tag = "enrollments"
)]
pub async fn get_enrollments_between(
    State(state): State<AppState>,
    ApiQuery(range): ApiQuery<DateRangeQuery>,
) -> ApiResult<Json<Vec<EnrollmentResponse>>> {
    let enrollments = state
        .enrollments
        .get_enrollments_between(range.from, range.to)
        .await?;
    let details = state.enrollments.with_details(enrollments).await?;
    Ok(Json(to_responses(&details)))
}

/// Set the grade, leaving the status untouched
#[utoipa::path(
    patch,
    path = "/api/enrollments/{id}/grade",
    params(("id" = i64, Path, description = "Enrollment id"), GradeQuery),
    responses(
        (status = 200, description = "Grade updated", body = EnrollmentResponse),
        (status = 400, description = "Blank or overlong grade", body = ErrorResponse),
        (status = 404, description = "Enrollment not found", body = ErrorResponse)
    ),
    tag = "enrollments"
)]
pub async fn update_grade(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<GradeQuery>,
) -> ApiResult<Json<EnrollmentResponse>> {
    let grade = query.grade.trim();
    validate_grade(grade)?;
    let enrollment = state
        .enrollments
        .update_grade(EnrollmentId::new(id), grade)
        .await?;
    let details = state.enrollments.details_of(enrollment).await?;
    Ok(Json(EnrollmentResponse::from(&details)))
}

/// Set the status, leaving the grade untouched
///
/// Any status may replace any other.
#[utoipa::path(
    patch,
    path = "/api/enrollments/{id}/status",
    params(("id" = i64, Path, description = "Enrollment id"), StatusQuery),
    responses(
        (status = 200, description = "Status updated", body = EnrollmentResponse),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 404, description = "Enrollment not found", body = ErrorResponse)
    ),
    tag = "enrollments"
)]
pub async fn update_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<StatusQuery>,
) -> ApiResult<Json<EnrollmentResponse>> {
    let status: EnrollmentStatus = query.status.parse()?;
    let enrollment = state
        .enrollments
        .update_status(EnrollmentId::new(id), status)
        .await?;
    let details = state.enrollments.details_of(enrollment).await?;
    Ok(Json(EnrollmentResponse::from(&details)))
}
