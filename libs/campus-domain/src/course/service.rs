//! Course service - invariants and lifecycle of Course records

use std::sync::Arc;

use tracing::{info, warn};

use super::entity::validate_credits;
use super::{Course, CourseInput};
use crate::error::{CampusError, EntityKind, Result};
use crate::ids::CourseId;
use crate::ports::{CourseRepository, EnrollmentRepository};

/// Service enforcing the Course aggregate's rules
///
/// - The course code is well-formed and unique
/// - Credits stay within bounds
/// - Deleting a course removes its enrollments
pub struct CourseService<R> {
    repository: Arc<R>,
}

impl<R> CourseService<R>
where
    R: CourseRepository + EnrollmentRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new course
    ///
    /// Format and bounds are checked before uniqueness.
    ///
    /// # Errors
    ///
    /// - `CampusError::InvalidInput` for a malformed code or out-of-range credits
    /// - `CampusError::Conflict` if the code is already taken
    pub async fn create_course(&self, input: CourseInput) -> Result<Course> {
        info!(code = %input.code, "Creating course");

        input.validate()?;

        if self
            .repository
            .find_course_by_code(&input.code)
            .await?
            .is_some()
        {
            warn!(code = %input.code, "Course code already registered");
            return Err(duplicate_code(&input.code));
        }

        let course = self.repository.insert_course(input).await?;

        info!(course_id = %course.id(), code = %course.code(), "Course created");
        Ok(course)
    }

    pub async fn get_course_by_id(&self, id: CourseId) -> Result<Course> {
        self.repository
            .find_course(id)
            .await?
            .ok_or_else(|| CampusError::course_not_found(id))
    }

    pub async fn get_course_by_code(&self, code: &str) -> Result<Course> {
        self.repository
            .find_course_by_code(code)
            .await?
            .ok_or_else(|| CampusError::not_found(EntityKind::Course, format!("code: {}", code)))
    }

    pub async fn course_exists(&self, id: CourseId) -> Result<bool> {
        self.repository.course_exists(id).await
    }

    /// Fail with `NotFound` unless the course exists
    pub async fn ensure_course_exists(&self, id: CourseId) -> Result<()> {
        if self.course_exists(id).await? {
            Ok(())
        } else {
            warn!(course_id = %id, "Course not found");
            Err(CampusError::course_not_found(id))
        }
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        let courses = self.repository.list_courses().await?;
        info!(count = courses.len(), "Listed courses");
        Ok(courses)
    }

    /// Case-insensitive substring search on the course name
    ///
    /// An empty result is not an error; a blank term is.
    pub async fn search_courses_by_name(&self, term: &str) -> Result<Vec<Course>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(CampusError::invalid_input("Search name cannot be blank"));
        }

        let courses = self.repository.search_courses_by_name(term).await?;
        info!(term, count = courses.len(), "Searched courses by name");
        Ok(courses)
    }

    /// Courses taught by exactly this instructor name
    pub async fn get_courses_by_instructor(&self, instructor: &str) -> Result<Vec<Course>> {
        self.repository.courses_by_instructor(instructor).await
    }

    pub async fn get_courses_by_credits(&self, credits: i32) -> Result<Vec<Course>> {
        validate_credits(credits)?;
        self.repository.courses_by_credits(credits).await
    }

    /// Overwrite every field of a course except its id
    ///
    /// # Errors
    ///
    /// - `CampusError::NotFound` if the id does not exist
    /// - `CampusError::InvalidInput` for a malformed code or out-of-range credits
    /// - `CampusError::Conflict` if the code changed and belongs to another course
    pub async fn update_course(&self, id: CourseId, input: CourseInput) -> Result<Course> {
        info!(course_id = %id, code = %input.code, "Updating course");

        let mut course = self.get_course_by_id(id).await?;
        input.validate()?;

        if course.code() != input.code
            && self
                .repository
                .find_course_by_code(&input.code)
                .await?
                .is_some()
        {
            warn!(course_id = %id, code = %input.code, "Course code already registered");
            return Err(duplicate_code(&input.code));
        }

        course.apply(input);
        self.repository.update_course(&course).await?;

        info!(course_id = %id, "Course updated");
        Ok(course)
    }

    /// Delete a course and every enrollment referencing it
    pub async fn delete_course(&self, id: CourseId) -> Result<()> {
        info!(course_id = %id, "Deleting course");

        self.ensure_course_exists(id).await?;

        let removed = self.repository.delete_enrollments_by_course(id).await?;
        if !self.repository.delete_course(id).await? {
            return Err(CampusError::course_not_found(id));
        }

        info!(course_id = %id, enrollments_removed = removed, "Course deleted");
        Ok(())
    }
}

fn duplicate_code(code: &str) -> CampusError {
    CampusError::conflict(format!("Course with code {} already exists", code))
}
