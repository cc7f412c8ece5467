//! Student service - invariants and lifecycle of Student records
//!
//! Owns the unique-email invariant and the cascade from a deleted student to
//! its enrollments.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;
use tracing::{info, warn};

use super::{NewStudent, Student, StudentInput};
use crate::error::{CampusError, EntityKind, Result};
use crate::ids::StudentId;
use crate::ports::{EnrollmentRepository, StudentRepository};

/// Service enforcing the Student aggregate's rules
///
/// Generic over the store so the compiler can specialise each adapter.
pub struct StudentService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> StudentService<R>
where
    R: StudentRepository + EnrollmentRepository,
{
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Register a new student
    ///
    /// # Errors
    ///
    /// - `CampusError::InvalidInput` if the date of birth is not in the past
    /// - `CampusError::Conflict` if another student already has this email
    pub async fn create_student(&self, input: StudentInput) -> Result<Student> {
        info!(email = %input.email, "Creating student");

        let today = self.clock.utc().date_naive();
        input.validate(today)?;

        if self
            .repository
            .find_student_by_email(&input.email)
            .await?
            .is_some()
        {
            warn!(email = %input.email, "Student email already registered");
            return Err(duplicate_email(&input.email));
        }

        let student = self
            .repository
            .insert_student(NewStudent::from_input(input, today))
            .await?;

        info!(student_id = %student.id(), "Student created");
        Ok(student)
    }

    pub async fn get_student_by_id(&self, id: StudentId) -> Result<Student> {
        self.repository
            .find_student(id)
            .await?
            .ok_or_else(|| CampusError::student_not_found(id))
    }

    pub async fn get_student_by_email(&self, email: &str) -> Result<Student> {
        self.repository
            .find_student_by_email(email)
            .await?
            .ok_or_else(|| CampusError::not_found(EntityKind::Student, format!("email: {}", email)))
    }

    pub async fn student_exists(&self, id: StudentId) -> Result<bool> {
        self.repository.student_exists(id).await
    }

    /// Fail with `NotFound` unless the student exists
    pub async fn ensure_student_exists(&self, id: StudentId) -> Result<()> {
        if self.student_exists(id).await? {
            Ok(())
        } else {
            warn!(student_id = %id, "Student not found");
            Err(CampusError::student_not_found(id))
        }
    }

    /// All students, in insertion order
    pub async fn list_students(&self) -> Result<Vec<Student>> {
        let students = self.repository.list_students().await?;
        info!(count = students.len(), "Listed students");
        Ok(students)
    }

    /// Overwrite a student's mutable fields
    ///
    /// The id and enrollment date are preserved.
    ///
    /// # Errors
    ///
    /// - `CampusError::NotFound` if the id does not exist
    /// - `CampusError::InvalidInput` if the date of birth is not in the past
    /// - `CampusError::Conflict` if the email changed and belongs to another student
    pub async fn update_student(&self, id: StudentId, input: StudentInput) -> Result<Student> {
        info!(student_id = %id, "Updating student");

        let mut student = self.get_student_by_id(id).await?;
        input.validate(self.clock.utc().date_naive())?;

        if student.email() != input.email
            && self
                .repository
                .find_student_by_email(&input.email)
                .await?
                .is_some()
        {
            warn!(student_id = %id, email = %input.email, "Student email already registered");
            return Err(duplicate_email(&input.email));
        }

        student.apply(input);
        self.repository.update_student(&student).await?;

        info!(student_id = %id, "Student updated");
        Ok(student)
    }

    /// Delete a student and every enrollment referencing it
    ///
    /// Enrollments are removed first, then the student. See the port
    /// documentation for the atomicity required of the store.
    pub async fn delete_student(&self, id: StudentId) -> Result<()> {
        info!(student_id = %id, "Deleting student");

        self.ensure_student_exists(id).await?;

        let removed = self.repository.delete_enrollments_by_student(id).await?;
        if !self.repository.delete_student(id).await? {
            return Err(CampusError::student_not_found(id));
        }

        info!(student_id = %id, enrollments_removed = removed, "Student deleted");
        Ok(())
    }

    /// Case-insensitive substring search on "first last"
    ///
    /// # Errors
    ///
    /// Returns `CampusError::InvalidInput` for a blank term
    pub async fn search_students_by_name(&self, term: &str) -> Result<Vec<Student>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(CampusError::invalid_input("Search name cannot be blank"));
        }

        let students = self.repository.search_students_by_name(term).await?;
        info!(term, count = students.len(), "Searched students by name");
        Ok(students)
    }

    /// Students whose enrollment date falls within `[from, to]`
    pub async fn get_students_enrolled_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Student>> {
        if from > to {
            return Err(CampusError::invalid_input(format!(
                "Start date {} is after end date {}",
                from, to
            )));
        }

        self.repository.students_enrolled_between(from, to).await
    }
}

fn duplicate_email(email: &str) -> CampusError {
    CampusError::conflict(format!("Student with email {} already exists", email))
}
