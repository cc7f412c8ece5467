//! Shape validation for inbound requests
//!
//! These checks run before a request reaches the domain. Business rules
//! (course code format, credit range, uniqueness, date of birth) live in
//! `campus_domain` and surface as `InvalidInput` or `Conflict` instead.

use crate::dto::{CourseRequest, StudentRequest};
use crate::error::{ApiError, FieldErrors};

pub const FIRST_NAME_LEN: (usize, usize) = (2, 50);
pub const ADDRESS_MAX: usize = 200;
pub const COURSE_NAME_LEN: (usize, usize) = (3, 100);
pub const INSTRUCTOR_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 500;
pub const GRADE_MAX: usize = 5;
pub const PHONE_DIGITS: usize = 10;

/// Collects the first failure per field
#[derive(Debug, Default)]
struct FieldChecks {
    errors: FieldErrors,
}

impl FieldChecks {
    fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    fn required(&mut self, field: &str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.fail(field, "must not be blank");
            return false;
        }
        true
    }

    fn length(&mut self, field: &str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len < min || len > max {
            self.fail(field, format!("must be between {} and {} characters", min, max));
        }
    }

    fn max_length(&mut self, field: &str, value: Option<&str>, max: usize) {
        if value.is_some_and(|v| v.chars().count() > max) {
            self.fail(field, format!("must be at most {} characters", max));
        }
    }

    fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.errors))
        }
    }
}

/// `local@domain.tld` with no whitespace and a single `@`
pub fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !host.ends_with('.'),
        None => false,
    }
}

pub fn is_phone_shaped(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_student(request: &StudentRequest) -> Result<(), ApiError> {
    let mut checks = FieldChecks::default();

    if checks.required("firstName", &request.first_name) {
        checks.length(
            "firstName",
            &request.first_name,
            FIRST_NAME_LEN.0,
            FIRST_NAME_LEN.1,
        );
    }
    checks.required("lastName", &request.last_name);
    if checks.required("email", &request.email) && !is_email_shaped(&request.email) {
        checks.fail("email", "must be a well-formed email address");
    }
    if !is_phone_shaped(&request.phone) {
        checks.fail("phone", format!("must be exactly {} digits", PHONE_DIGITS));
    }
    checks.max_length("address", request.address.as_deref(), ADDRESS_MAX);

    checks.finish()
}

pub fn validate_course(request: &CourseRequest) -> Result<(), ApiError> {
    let mut checks = FieldChecks::default();

    if checks.required("courseName", &request.course_name) {
        checks.length(
            "courseName",
            &request.course_name,
            COURSE_NAME_LEN.0,
            COURSE_NAME_LEN.1,
        );
    }
    checks.required("courseCode", &request.course_code);
    if checks.required("instructor", &request.instructor) {
        checks.max_length("instructor", Some(request.instructor.as_str()), INSTRUCTOR_MAX);
    }
    checks.max_length("description", request.description.as_deref(), DESCRIPTION_MAX);

    checks.finish()
}

pub fn validate_grade(grade: &str) -> Result<(), ApiError> {
    let mut checks = FieldChecks::default();
    if checks.required("grade", grade) {
        checks.max_length("grade", Some(grade), GRADE_MAX);
    }
    checks.finish()
}

/// Non-blank path or query value
pub fn require_term(field: &str, value: &str) -> Result<(), ApiError> {
    let mut checks = FieldChecks::default();
    checks.required(field, value);
    checks.finish()
}
