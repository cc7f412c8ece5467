//! Enrollment service - cross-aggregate rules and enrollment status
//!
//! Student and Course existence is always asked of their own services, never
//! read from their storage directly. Enrollment rows go through the store.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;
use tracing::{debug, info, warn};

use super::{Enrollment, EnrollmentDetails, EnrollmentStatus, NewEnrollment};
use crate::course::CourseService;
use crate::error::{CampusError, EntityKind, Result};
use crate::ids::{CourseId, EnrollmentId, StudentId};
use crate::ports::CampusStore;
use crate::student::StudentService;

/// Service coordinating students, courses and their enrollments
///
/// This service encapsulates:
/// - Referential existence of both sides at enrollment time
/// - Uniqueness of the (student, course) pair
/// - The enrollment status, which is settable to any value at any time
pub struct EnrollmentService<R> {
    students: Arc<StudentService<R>>,
    courses: Arc<CourseService<R>>,
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> EnrollmentService<R>
where
    R: CampusStore,
{
    pub fn new(
        students: Arc<StudentService<R>>,
        courses: Arc<CourseService<R>>,
        repository: Arc<R>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            students,
            courses,
            repository,
            clock,
        }
    }

    /// Enroll a student in a course
    ///
    /// The student is resolved before the course. The new enrollment is
    /// `ACTIVE` and dated today; neither is client-supplied.
    ///
    /// # Errors
    ///
    /// - `CampusError::NotFound` (student, then course) if either side is missing
    /// - `CampusError::Conflict` if the pair is already enrolled
    pub async fn enroll_student(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<Enrollment> {
        info!(student_id = %student_id, course_id = %course_id, "Enrolling student");

        let student = self.students.get_student_by_id(student_id).await?;
        let course = self.courses.get_course_by_id(course_id).await?;

        if self
            .repository
            .find_enrollment_by_pair(student.id(), course.id())
            .await?
            .is_some()
        {
            warn!(student_id = %student_id, course_id = %course_id, "Student already enrolled");
            return Err(CampusError::conflict(format!(
                "Student {} is already enrolled in course {}",
                student_id,
                course.code()
            )));
        }

        let enrollment = self
            .repository
            .insert_enrollment(NewEnrollment::active(
                student.id(),
                course.id(),
                self.clock.utc().date_naive(),
            ))
            .await?;

        info!(enrollment_id = %enrollment.id(), "Enrollment created");
        Ok(enrollment)
    }

    pub async fn get_enrollment_by_id(&self, id: EnrollmentId) -> Result<Enrollment> {
        self.repository
            .find_enrollment(id)
            .await?
            .ok_or_else(|| CampusError::enrollment_not_found(id))
    }

    pub async fn list_enrollments(&self) -> Result<Vec<Enrollment>> {
        let enrollments = self.repository.list_enrollments().await?;
        info!(count = enrollments.len(), "Listed enrollments");
        Ok(enrollments)
    }

    /// Enrollments of an existing student
    ///
    /// A student that never existed is `NotFound`, distinct from a student
    /// with zero enrollments.
    pub async fn get_enrollments_by_student(&self, student_id: StudentId) -> Result<Vec<Enrollment>> {
        self.students.ensure_student_exists(student_id).await?;
        self.repository.enrollments_by_student(student_id, None).await
    }

    /// Enrollments of an existing course
    pub async fn get_enrollments_by_course(&self, course_id: CourseId) -> Result<Vec<Enrollment>> {
        self.courses.ensure_course_exists(course_id).await?;
        self.repository.enrollments_by_course(course_id).await
    }

    /// `ACTIVE` enrollments of an existing student
    pub async fn get_active_enrollments_by_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<Enrollment>> {
        self.students.ensure_student_exists(student_id).await?;
        self.repository
            .enrollments_by_student(student_id, Some(EnrollmentStatus::Active))
            .await
    }

    pub async fn get_enrollments_by_status(
        &self,
        status: EnrollmentStatus,
    ) -> Result<Vec<Enrollment>> {
        let enrollments = self.repository.enrollments_by_status(status).await?;
        info!(status = %status, count = enrollments.len(), "Listed enrollments by status");
        Ok(enrollments)
    }

    /// Enrollments dated within `[from, to]`
    pub async fn get_enrollments_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Enrollment>> {
        if from > to {
            return Err(CampusError::invalid_input(format!(
                "Start date {} is after end date {}",
                from, to
            )));
        }

        self.repository.enrollments_between(from, to).await
    }

    /// The enrollment linking a student and a course
    pub async fn get_enrollment_for(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<Enrollment> {
        self.students.ensure_student_exists(student_id).await?;
        self.courses.ensure_course_exists(course_id).await?;

        self.repository
            .find_enrollment_by_pair(student_id, course_id)
            .await?
            .ok_or_else(|| {
                CampusError::not_found(
                    EntityKind::Enrollment,
                    format!("student ID: {} and course ID: {}", student_id, course_id),
                )
            })
    }

    /// Overwrite the grade; the status is untouched
    pub async fn update_grade(&self, id: EnrollmentId, grade: &str) -> Result<Enrollment> {
        info!(enrollment_id = %id, grade, "Updating grade");

        let mut enrollment = self.get_enrollment_by_id(id).await?;
        enrollment.set_grade(grade);
        self.repository.update_enrollment(&enrollment).await?;

        Ok(enrollment)
    }

    /// Overwrite the status; the grade is untouched
    ///
    /// Any status may replace any other. Re-activating a `DROPPED` or
    /// `COMPLETED` enrollment is accepted.
    pub async fn update_status(
        &self,
        id: EnrollmentId,
        status: EnrollmentStatus,
    ) -> Result<Enrollment> {
        info!(enrollment_id = %id, status = %status, "Updating status");

        let mut enrollment = self.get_enrollment_by_id(id).await?;
        let previous = enrollment.status();
        enrollment.set_status(status);
        self.repository.update_enrollment(&enrollment).await?;

        info!(enrollment_id = %id, from = %previous, to = %status, "Status updated");
        Ok(enrollment)
    }

    pub async fn delete_enrollment(&self, id: EnrollmentId) -> Result<()> {
        info!(enrollment_id = %id, "Deleting enrollment");

        if !self.repository.delete_enrollment(id).await? {
            warn!(enrollment_id = %id, "Enrollment not found");
            return Err(CampusError::enrollment_not_found(id));
        }

        Ok(())
    }

    pub async fn count_enrollments_by_student(&self, student_id: StudentId) -> Result<u64> {
        self.students.ensure_student_exists(student_id).await?;
        self.repository.count_by_student(student_id).await
    }

    pub async fn count_enrollments_by_course(&self, course_id: CourseId) -> Result<u64> {
        self.courses.ensure_course_exists(course_id).await?;
        self.repository.count_by_course(course_id).await
    }

    /// Attach the student's full name and the course's name and code
    ///
    /// An enrollment whose student or course vanished after it was read
    /// (a cascade delete running concurrently) is left out.
    pub async fn with_details(
        &self,
        enrollments: Vec<Enrollment>,
    ) -> Result<Vec<EnrollmentDetails>> {
        let mut student_names: HashMap<StudentId, Option<String>> = HashMap::new();
        let mut course_labels: HashMap<CourseId, Option<(String, String)>> = HashMap::new();
        let mut details = Vec::with_capacity(enrollments.len());

        for enrollment in enrollments {
            let student_id = enrollment.student_id();
            if !student_names.contains_key(&student_id) {
                let name = match self.students.get_student_by_id(student_id).await {
                    Ok(student) => Some(student.full_name()),
                    Err(CampusError::NotFound { .. }) => None,
                    Err(err) => return Err(err),
                };
                student_names.insert(student_id, name);
            }

            let course_id = enrollment.course_id();
            if !course_labels.contains_key(&course_id) {
                let label = match self.courses.get_course_by_id(course_id).await {
                    Ok(course) => Some((course.name().to_string(), course.code().to_string())),
                    Err(CampusError::NotFound { .. }) => None,
                    Err(err) => return Err(err),
                };
                course_labels.insert(course_id, label);
            }

            match (&student_names[&student_id], &course_labels[&course_id]) {
                (Some(student_name), Some((course_name, course_code))) => {
                    details.push(EnrollmentDetails {
                        student_name: student_name.clone(),
                        course_name: course_name.clone(),
                        course_code: course_code.clone(),
                        enrollment,
                    });
                }
                _ => debug!(
                    enrollment_id = %enrollment.id(),
                    "Skipping enrollment with a deleted parent"
                ),
            }
        }

        Ok(details)
    }

    /// Single-record form of [`Self::with_details`]
    ///
    /// # Errors
    ///
    /// `CampusError::NotFound` (enrollment) if its student or course is gone.
    pub async fn details_of(&self, enrollment: Enrollment) -> Result<EnrollmentDetails> {
        let id = enrollment.id();
        self.with_details(vec![enrollment])
            .await?
            .pop()
            .ok_or_else(|| CampusError::enrollment_not_found(id))
    }
}
