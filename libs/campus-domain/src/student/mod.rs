//! Student aggregate
//!
//! A student is identified by a store-assigned id and by a unique email.

mod entity;
mod service;

pub use entity::{NewStudent, Student, StudentInput};
pub use service::StudentService;
