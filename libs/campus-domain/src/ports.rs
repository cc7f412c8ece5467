//! Ports (trait definitions) for the entity store
//!
//! The domain defines the query shapes it needs, and adapter crates provide
//! implementations. Every operation returns `CampusError`; a fault the store
//! cannot classify must surface as `CampusError::StorageFailure`.
//!
//! ## Atomicity
//!
//! Each `insert_*` and `update_*` call must make its own uniqueness check and
//! write atomic: two concurrent inserts with the same email, course code, or
//! (student, course) pair must not both succeed. The loser is rejected with
//! `CampusError::Conflict`. A store backed by a database gets this from a
//! unique constraint; an in-process store from holding one write lock.
//!
//! Cascading deletes are issued by the services as two calls (dependent
//! enrollments first, then the parent). A store that offers transactions
//! should run the pair in one transaction.
//!
//! No enrollment may outlive its student or course, even when an enroll
//! races a cascade. So `insert_enrollment` must confirm that both parents
//! exist atomically with the write. `delete_student` and `delete_course` must
//! also drop any enrollment still referencing the removed row. A database
//! store gets both from foreign keys with `ON DELETE CASCADE`.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` to keep zero-cost abstractions and static dispatch.

use std::future::Future;

use chrono::NaiveDate;

use crate::course::{Course, CourseInput};
use crate::enrollment::{Enrollment, EnrollmentStatus, NewEnrollment};
use crate::error::CampusError;
use crate::ids::{CourseId, EnrollmentId, StudentId};
use crate::student::{NewStudent, Student};

/// Port for student storage
pub trait StudentRepository: Send + Sync {
    /// Persist a new student and return it with its assigned id
    ///
    /// # Errors
    ///
    /// Returns `CampusError::Conflict` if the email is already taken
    fn insert_student(
        &self,
        student: NewStudent,
    ) -> impl Future<Output = Result<Student, CampusError>> + Send;

    fn find_student(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<Option<Student>, CampusError>> + Send;

    /// Exact, case-sensitive email lookup
    fn find_student_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Student>, CampusError>> + Send;

    fn student_exists(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<bool, CampusError>> + Send;

    /// All students in insertion order
    fn list_students(&self) -> impl Future<Output = Result<Vec<Student>, CampusError>> + Send;

    /// Case-insensitive substring match on "first last"
    fn search_students_by_name(
        &self,
        term: &str,
    ) -> impl Future<Output = Result<Vec<Student>, CampusError>> + Send;

    /// Students whose enrollment date lies in `[from, to]`
    fn students_enrolled_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Student>, CampusError>> + Send;

    /// Overwrite a stored student in place
    ///
    /// # Errors
    ///
    /// - `CampusError::NotFound` if the id no longer exists
    /// - `CampusError::Conflict` if the email belongs to another student
    fn update_student(
        &self,
        student: &Student,
    ) -> impl Future<Output = Result<(), CampusError>> + Send;

    /// Remove a student and any enrollment still referencing it
    ///
    /// Returns whether a student row was removed.
    fn delete_student(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<bool, CampusError>> + Send;
}

/// Port for course storage
pub trait CourseRepository: Send + Sync {
    /// Persist a new course and return it with its assigned id
    ///
    /// # Errors
    ///
    /// Returns `CampusError::Conflict` if the course code is already taken
    fn insert_course(
        &self,
        course: CourseInput,
    ) -> impl Future<Output = Result<Course, CampusError>> + Send;

    fn find_course(
        &self,
        id: CourseId,
    ) -> impl Future<Output = Result<Option<Course>, CampusError>> + Send;

    fn find_course_by_code(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<Option<Course>, CampusError>> + Send;

    fn course_exists(
        &self,
        id: CourseId,
    ) -> impl Future<Output = Result<bool, CampusError>> + Send;

    fn list_courses(&self) -> impl Future<Output = Result<Vec<Course>, CampusError>> + Send;

    /// Case-insensitive substring match on the course name
    fn search_courses_by_name(
        &self,
        term: &str,
    ) -> impl Future<Output = Result<Vec<Course>, CampusError>> + Send;

    /// Exact match on the instructor name
    fn courses_by_instructor(
        &self,
        instructor: &str,
    ) -> impl Future<Output = Result<Vec<Course>, CampusError>> + Send;

    fn courses_by_credits(
        &self,
        credits: i32,
    ) -> impl Future<Output = Result<Vec<Course>, CampusError>> + Send;

    /// Overwrite a stored course in place
    ///
    /// # Errors
    ///
    /// - `CampusError::NotFound` if the id no longer exists
    /// - `CampusError::Conflict` if the code belongs to another course
    fn update_course(
        &self,
        course: &Course,
    ) -> impl Future<Output = Result<(), CampusError>> + Send;

    /// Remove a course and any enrollment still referencing it
    fn delete_course(
        &self,
        id: CourseId,
    ) -> impl Future<Output = Result<bool, CampusError>> + Send;
}

/// Port for enrollment storage
pub trait EnrollmentRepository: Send + Sync {
    /// Persist a new enrollment and return it with its assigned id
    ///
    /// # Errors
    ///
    /// - `CampusError::NotFound` if the student, then the course, does not exist
    /// - `CampusError::Conflict` if the (student, course) pair already exists
    fn insert_enrollment(
        &self,
        enrollment: NewEnrollment,
    ) -> impl Future<Output = Result<Enrollment, CampusError>> + Send;

    fn find_enrollment(
        &self,
        id: EnrollmentId,
    ) -> impl Future<Output = Result<Option<Enrollment>, CampusError>> + Send;

    fn find_enrollment_by_pair(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> impl Future<Output = Result<Option<Enrollment>, CampusError>> + Send;

    fn enrollment_exists(
        &self,
        id: EnrollmentId,
    ) -> impl Future<Output = Result<bool, CampusError>> + Send;

    fn list_enrollments(
        &self,
    ) -> impl Future<Output = Result<Vec<Enrollment>, CampusError>> + Send;

    fn enrollments_by_student(
        &self,
        student_id: StudentId,
        status: Option<EnrollmentStatus>,
    ) -> impl Future<Output = Result<Vec<Enrollment>, CampusError>> + Send;

    fn enrollments_by_course(
        &self,
        course_id: CourseId,
    ) -> impl Future<Output = Result<Vec<Enrollment>, CampusError>> + Send;

    fn enrollments_by_status(
        &self,
        status: EnrollmentStatus,
    ) -> impl Future<Output = Result<Vec<Enrollment>, CampusError>> + Send;

    /// Enrollments whose date lies in `[from, to]`
    fn enrollments_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Enrollment>, CampusError>> + Send;

    fn count_by_student(
        &self,
        student_id: StudentId,
    ) -> impl Future<Output = Result<u64, CampusError>> + Send;

    fn count_by_course(
        &self,
        course_id: CourseId,
    ) -> impl Future<Output = Result<u64, CampusError>> + Send;

    /// Overwrite a stored enrollment's grade and status
    ///
    /// # Errors
    ///
    /// Returns `CampusError::NotFound` if the id no longer exists
    fn update_enrollment(
        &self,
        enrollment: &Enrollment,
    ) -> impl Future<Output = Result<(), CampusError>> + Send;

    fn delete_enrollment(
        &self,
        id: EnrollmentId,
    ) -> impl Future<Output = Result<bool, CampusError>> + Send;

    /// Remove every enrollment of a student, returning how many were removed
    fn delete_enrollments_by_student(
        &self,
        student_id: StudentId,
    ) -> impl Future<Output = Result<u64, CampusError>> + Send;

    /// Remove every enrollment of a course, returning how many were removed
    fn delete_enrollments_by_course(
        &self,
        course_id: CourseId,
    ) -> impl Future<Output = Result<u64, CampusError>> + Send;
}

/// A store implementing every port
pub trait CampusStore: StudentRepository + CourseRepository + EnrollmentRepository {}

impl<T> CampusStore for T where T: StudentRepository + CourseRepository + EnrollmentRepository {}
