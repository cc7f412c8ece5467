//! Enrollment entity and status
//!
//! An Enrollment links exactly one student to exactly one course. Its status
//! starts at `ACTIVE`; any of the three values may be set afterwards. No
//! transition table is enforced here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CampusError;
use crate::ids::{CourseId, EnrollmentId, StudentId};

/// Lifecycle state of an enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    Active,
    Completed,
    Dropped,
}

impl EnrollmentStatus {
    pub const ALL: [EnrollmentStatus; 3] = [Self::Active, Self::Completed, Self::Dropped];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Dropped => "DROPPED",
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnrollmentStatus {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CampusError::invalid_input(format!(
                    "Unknown enrollment status '{}', expected one of ACTIVE, COMPLETED, DROPPED",
                    s
                ))
            })
    }
}

/// An enrollment not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEnrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub enrollment_date: NaiveDate,
    pub status: EnrollmentStatus,
}

impl NewEnrollment {
    /// A fresh `ACTIVE` enrollment dated `today`
    pub fn active(student_id: StudentId, course_id: CourseId, today: NaiveDate) -> Self {
        Self {
            student_id,
            course_id,
            enrollment_date: today,
            status: EnrollmentStatus::Active,
        }
    }
}

/// A persisted enrollment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    id: EnrollmentId,
    student_id: StudentId,
    course_id: CourseId,
    enrollment_date: NaiveDate,
    grade: Option<String>,
    status: EnrollmentStatus,
}

impl Enrollment {
    /// Build the stored form of `new` under the store-assigned `id`
    pub fn from_new(id: EnrollmentId, new: NewEnrollment) -> Self {
        Self {
            id,
            student_id: new.student_id,
            course_id: new.course_id,
            enrollment_date: new.enrollment_date,
            grade: None,
            status: new.status,
        }
    }

    pub fn id(&self) -> EnrollmentId {
        self.id
    }

    pub fn student_id(&self) -> StudentId {
        self.student_id
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn enrollment_date(&self) -> NaiveDate {
        self.enrollment_date
    }

    pub fn grade(&self) -> Option<&str> {
        self.grade.as_deref()
    }

    pub fn status(&self) -> EnrollmentStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == EnrollmentStatus::Active
    }

    pub fn set_grade(&mut self, grade: impl Into<String>) {
        self.grade = Some(grade.into());
    }

    pub fn set_status(&mut self, status: EnrollmentStatus) {
        self.status = status;
    }
}

/// An enrollment together with the names of the student and course it links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentDetails {
    pub enrollment: Enrollment,
    pub student_name: String,
    pub course_name: String,
    pub course_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrollment() -> Enrollment {
        Enrollment::from_new(
            EnrollmentId::new(1),
            NewEnrollment::active(
                StudentId::new(1),
                CourseId::new(2),
                NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            ),
        )
    }

    #[test]
    fn test_new_enrollment_is_active_without_grade() {
        let e = enrollment();
        assert!(e.is_active());
        assert_eq!(e.grade(), None);
        assert_eq!(e.course_id(), CourseId::new(2));
    }

    #[test]
    fn test_status_parse_accepts_exact_names() {
        for status in EnrollmentStatus::ALL {
            assert_eq!(status.as_str().parse::<EnrollmentStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_rejects_case_and_whitespace_variants() {
        for raw in ["completed", " COMPLETED ", "Dropped", ""] {
            let err = raw.parse::<EnrollmentStatus>().unwrap_err();
            assert!(matches!(err, CampusError::InvalidInput(_)), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_unknown_status_is_invalid_input() {
        let err = "PAUSED".parse::<EnrollmentStatus>().unwrap_err();
        assert!(matches!(err, CampusError::InvalidInput(_)));
    }

    #[test]
    fn test_status_serializes_uppercase() {
        let json = serde_json::to_string(&EnrollmentStatus::Completed).unwrap();
        assert_eq!(json, "\"COMPLETED\"");
    }

    #[test]
    fn test_grade_and_status_are_independent() {
        let mut e = enrollment();
        e.set_grade("A+");
        assert_eq!(e.status(), EnrollmentStatus::Active);

        e.set_status(EnrollmentStatus::Dropped);
        assert_eq!(e.grade(), Some("A+"));

        // Re-activating a dropped enrollment is permitted.
        e.set_status(EnrollmentStatus::Active);
        assert!(e.is_active());
    }
}
