//! # Campus In-Memory Store
//!
//! An entity store adapter implementing every `campus_domain` port inside the
//! process. Used by the HTTP service for local runs and by the test suites.
//!
//! ```rust
//! use campus_domain::CampusServices;
//! use campus_memory::InMemoryStore;
//!
//! let services = CampusServices::new(InMemoryStore::new());
//! # let _ = services;
//! ```

mod course;
mod enrollment;
mod store;
mod student;

pub use store::InMemoryStore;
