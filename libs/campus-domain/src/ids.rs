use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a store-assigned sequence value
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Get the inner sequence value
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a Student
    ///
    /// Assigned by the entity store from its student sequence; never reused
    /// for another student and never changed once assigned.
    StudentId
);

entity_id!(
    /// Unique identifier for a Course
    CourseId
);

entity_id!(
    /// Unique identifier for an Enrollment
    EnrollmentId
);
