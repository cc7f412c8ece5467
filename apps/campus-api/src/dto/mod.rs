//! Data Transfer Objects for API requests and responses

pub mod common;
pub mod course;
pub mod enrollment;
pub mod student;

pub use common::{CountResponse, DateRangeQuery, ErrorResponse, SearchQuery};
pub use course::{CourseRequest, CourseResponse};
pub use enrollment::{EnrollmentRequest, EnrollmentResponse, GradeQuery, PairQuery, StatusQuery};
pub use student::{StudentRequest, StudentResponse};
