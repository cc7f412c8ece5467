//! Enrollment aggregate
//!
//! This module links students to courses and owns the enrollment status.

mod entity;
mod service;

pub use entity::{Enrollment, EnrollmentDetails, EnrollmentStatus, NewEnrollment};
pub use service::EnrollmentService;
