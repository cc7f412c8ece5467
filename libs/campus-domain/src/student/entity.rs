//! Student entity and the inputs used to create or change one

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CampusError, Result};
use crate::ids::StudentId;

/// Caller-supplied student fields
///
/// Used by both create and update. `enrollment_date` only matters on create;
/// an update always keeps the stored enrollment date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub enrollment_date: Option<NaiveDate>,
}

impl StudentInput {
    /// Date of birth, when given, must lie strictly before `today`
    pub(crate) fn validate(&self, today: NaiveDate) -> Result<()> {
        match self.date_of_birth {
            Some(dob) if dob >= today => Err(CampusError::invalid_input(format!(
                "Date of birth {} must be in the past",
                dob
            ))),
            _ => Ok(()),
        }
    }
}

/// A student not yet persisted, with every default resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub enrollment_date: NaiveDate,
}

impl NewStudent {
    /// Resolve an input, defaulting the enrollment date to `today`
    pub fn from_input(input: StudentInput, today: NaiveDate) -> Self {
        Self {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            date_of_birth: input.date_of_birth,
            address: input.address,
            enrollment_date: input.enrollment_date.unwrap_or(today),
        }
    }
}

/// A persisted student record
///
/// The id and enrollment date are fixed once the store has accepted the
/// record; everything else can be overwritten through `apply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    date_of_birth: Option<NaiveDate>,
    address: Option<String>,
    enrollment_date: NaiveDate,
}

impl Student {
    /// Build the stored form of `new` under the store-assigned `id`
    pub fn from_new(id: StudentId, new: NewStudent) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            date_of_birth: new.date_of_birth,
            address: new.address,
            enrollment_date: new.enrollment_date,
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// First and last name joined by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn enrollment_date(&self) -> NaiveDate {
        self.enrollment_date
    }

    /// Overwrite every mutable field from `input`
    ///
    /// The id and the enrollment date are preserved, whatever `input` says.
    pub fn apply(&mut self, input: StudentInput) {
        self.first_name = input.first_name;
        self.last_name = input.last_name;
        self.email = input.email;
        self.phone = input.phone;
        self.date_of_birth = input.date_of_birth;
        self.address = input.address;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input() -> StudentInput {
        StudentInput {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "5550001111".to_string(),
            date_of_birth: Some(date(2001, 12, 10)),
            address: None,
            enrollment_date: None,
        }
    }

    #[test]
    fn test_enrollment_date_defaults_to_today() {
        let new = NewStudent::from_input(input(), date(2024, 9, 1));
        assert_eq!(new.enrollment_date, date(2024, 9, 1));
    }

    #[test]
    fn test_supplied_enrollment_date_is_kept() {
        let mut raw = input();
        raw.enrollment_date = Some(date(2023, 1, 15));

        let new = NewStudent::from_input(raw, date(2024, 9, 1));
        assert_eq!(new.enrollment_date, date(2023, 1, 15));
    }

    #[test]
    fn test_birth_date_must_be_in_the_past() {
        let today = date(2024, 9, 1);
        assert!(input().validate(today).is_ok());

        let mut raw = input();
        raw.date_of_birth = Some(today);
        assert!(matches!(
            raw.validate(today),
            Err(CampusError::InvalidInput(_))
        ));

        raw.date_of_birth = None;
        assert!(raw.validate(today).is_ok());
    }

    #[test]
    fn test_apply_preserves_identity_and_enrollment_date() {
        let mut student = Student::from_new(
            StudentId::new(5),
            NewStudent::from_input(input(), date(2024, 9, 1)),
        );

        let mut changed = input();
        changed.first_name = "Augusta".to_string();
        changed.email = "augusta@example.com".to_string();
        changed.enrollment_date = Some(date(1999, 1, 1));
        student.apply(changed);

        assert_eq!(student.id(), StudentId::new(5));
        assert_eq!(student.first_name(), "Augusta");
        assert_eq!(student.email(), "augusta@example.com");
        assert_eq!(student.enrollment_date(), date(2024, 9, 1));
        assert_eq!(student.full_name(), "Augusta Lovelace");
    }
}
