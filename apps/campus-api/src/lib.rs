//! Campus API library
//!
//! HTTP surface over the campus registry services. `main.rs` wires the
//! in-memory store and serves [`routes::create_router`]; integration tests
//! build the same router around their own store.

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod validation;

use std::sync::Arc;

use campus_domain::{CampusServices, CourseService, EnrollmentService, StudentService};
use campus_memory::InMemoryStore;

pub use routes::create_router;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<StudentService<InMemoryStore>>,
    pub courses: Arc<CourseService<InMemoryStore>>,
    pub enrollments: Arc<EnrollmentService<InMemoryStore>>,
}

impl AppState {
    pub fn new(services: CampusServices<InMemoryStore>) -> Self {
        Self {
            students: services.students,
            courses: services.courses,
            enrollments: services.enrollments,
        }
    }
}
