//! Course entity and its format rules

use serde::{Deserialize, Serialize};

use crate::error::{CampusError, Result};
use crate::ids::CourseId;

/// Inclusive bounds on course credits
pub const MIN_CREDITS: i32 = 1;
pub const MAX_CREDITS: i32 = 6;

/// Caller-supplied course fields, used for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInput {
    pub name: String,
    pub code: String,
    pub credits: i32,
    pub instructor: String,
    pub description: Option<String>,
}

impl CourseInput {
    /// Check the business format of the code and the credit bounds
    pub(crate) fn validate(&self) -> Result<()> {
        validate_course_code(&self.code)?;
        validate_credits(self.credits)
    }
}

/// A course code is 2-4 uppercase ASCII letters followed by exactly 3 digits
///
/// ```rust
/// use campus_domain::course::is_valid_course_code;
///
/// assert!(is_valid_course_code("CS101"));
/// assert!(is_valid_course_code("MATH204"));
/// assert!(!is_valid_course_code("cs101"));
/// assert!(!is_valid_course_code("C101"));
/// ```
pub fn is_valid_course_code(code: &str) -> bool {
    let letters = code.bytes().take_while(u8::is_ascii_uppercase).count();
    let digits = &code.as_bytes()[letters..];

    (2..=4).contains(&letters) && digits.len() == 3 && digits.iter().all(u8::is_ascii_digit)
}

pub(crate) fn validate_course_code(code: &str) -> Result<()> {
    if is_valid_course_code(code) {
        Ok(())
    } else {
        Err(CampusError::invalid_input(format!(
            "Course code '{}' must be 2-4 uppercase letters followed by 3 digits (e.g., CS101)",
            code
        )))
    }
}

pub(crate) fn validate_credits(credits: i32) -> Result<()> {
    if (MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
        Ok(())
    } else {
        Err(CampusError::invalid_input(format!(
            "Credits must be between {} and {}, got {}",
            MIN_CREDITS, MAX_CREDITS, credits
        )))
    }
}

/// A persisted course record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    name: String,
    code: String,
    credits: i32,
    instructor: String,
    description: Option<String>,
}

impl Course {
    /// Build the stored form of `input` under the store-assigned `id`
    pub fn from_input(id: CourseId, input: CourseInput) -> Self {
        Self {
            id,
            name: input.name,
            code: input.code,
            credits: input.credits,
            instructor: input.instructor,
            description: input.description,
        }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn credits(&self) -> i32 {
        self.credits
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Overwrite every field except the id
    pub fn apply(&mut self, input: CourseInput) {
        self.name = input.name;
        self.code = input.code;
        self.credits = input.credits;
        self.instructor = input.instructor;
        self.description = input.description;
    }
}
