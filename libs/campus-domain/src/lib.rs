//! # Campus Domain Layer
//!
//! This crate contains the business rules for the campus registry: students,
//! courses, and the enrollments linking them. It follows hexagonal architecture
//! principles:
//!
//! - **Entities**: Core domain models (Student, Course, Enrollment)
//! - **Ports**: Trait definitions for the entity store (StudentRepository, ...)
//! - **Services**: Business rule enforcement (uniqueness, referential existence,
//!   cascading deletion, enrollment status)
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (databases, HTTP, etc.).
//! The entity store is expressed as traits (ports) implemented by adapter crates.
//!
//! ## Example
//!
//! ```rust
//! use campus_domain::{CampusServices, CampusStore, StudentId, CourseId};
//!
//! // The services are generic over any store implementing the three ports
//! async fn example<R: CampusStore>(services: CampusServices<R>) {
//!     let enrollment = services
//!         .enrollments
//!         .enroll_student(StudentId::new(1), CourseId::new(1))
//!         .await
//!         .unwrap();
//!     println!("Enrolled: {}", enrollment.id());
//! }
//! ```

pub mod course;
pub mod enrollment;
pub mod error;
pub mod ids;
pub mod ports;
pub mod student;

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

// Re-export commonly used types
pub use course::{Course, CourseInput, CourseService};
pub use enrollment::{
    Enrollment, EnrollmentDetails, EnrollmentService, EnrollmentStatus, NewEnrollment,
};
pub use error::{CampusError, EntityKind, Result};
pub use ids::{CourseId, EnrollmentId, StudentId};
pub use ports::{CampusStore, CourseRepository, EnrollmentRepository, StudentRepository};
pub use student::{NewStudent, Student, StudentInput, StudentService};

/// The three domain services wired over one shared store
pub struct CampusServices<R> {
    pub students: Arc<StudentService<R>>,
    pub courses: Arc<CourseService<R>>,
    pub enrollments: Arc<EnrollmentService<R>>,
}

impl<R> CampusServices<R>
where
    R: CampusStore,
{
    /// Wire the services over `store` using the system clock
    pub fn new(store: R) -> Self {
        Self::with_clock(store, Arc::new(DefaultClock))
    }

    /// Wire the services with an explicit clock
    ///
    /// Server-assigned dates are the UTC calendar day of `clock.utc()`.
    pub fn with_clock(store: R, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(store);
        let students = Arc::new(StudentService::new(store.clone(), clock.clone()));
        let courses = Arc::new(CourseService::new(store.clone()));
        let enrollments = Arc::new(EnrollmentService::new(
            students.clone(),
            courses.clone(),
            store,
            clock,
        ));

        Self {
            students,
            courses,
            enrollments,
        }
    }
}

impl<R> Clone for CampusServices<R> {
    fn clone(&self) -> Self {
        Self {
            students: self.students.clone(),
            courses: self.courses.clone(),
            enrollments: self.enrollments.clone(),
        }
    }
}
