//! Course aggregate

mod entity;
mod service;

pub use entity::{is_valid_course_code, Course, CourseInput, MAX_CREDITS, MIN_CREDITS};
pub use service::CourseService;
