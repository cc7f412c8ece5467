//! `StudentRepository` over the in-memory tables

use campus_domain::{CampusError, NewStudent, Student, StudentId, StudentRepository};
use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use crate::store::InMemoryStore;

impl StudentRepository for InMemoryStore {
    #[instrument(skip(self, student), fields(email = %student.email))]
    async fn insert_student(&self, student: NewStudent) -> Result<Student, CampusError> {
        let mut tables = self.write().await;
        let students = &mut tables.students;

        if students.rows.values().any(|s| s.email() == student.email) {
            warn!("Rejected student with duplicate email");
            return Err(CampusError::conflict(format!(
                "Student with email {} already exists",
                student.email
            )));
        }

        let id = StudentId::new(students.next_id());
        let stored = Student::from_new(id, student);
        students.rows.insert(id.value(), stored.clone());

        info!(student_id = %id, "Stored student");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn find_student(&self, id: StudentId) -> Result<Option<Student>, CampusError> {
        let tables = self.read().await;
        let found = tables.students.rows.get(&id.value()).cloned();
        debug!(found = found.is_some(), "Looked up student");
        Ok(found)
    }

    #[instrument(skip(self))]
    async fn find_student_by_email(&self, email: &str) -> Result<Option<Student>, CampusError> {
        let tables = self.read().await;
        Ok(tables
            .students
            .rows
            .values()
            .find(|s| s.email() == email)
            .cloned())
    }

    async fn student_exists(&self, id: StudentId) -> Result<bool, CampusError> {
        Ok(self.read().await.students.rows.contains_key(&id.value()))
    }

    async fn list_students(&self) -> Result<Vec<Student>, CampusError> {
        Ok(self.read().await.students.select(|_| true))
    }

    #[instrument(skip(self))]
    async fn search_students_by_name(&self, term: &str) -> Result<Vec<Student>, CampusError> {
        let needle = term.to_lowercase();
        let tables = self.read().await;
        Ok(tables
            .students
            .select(|s| s.full_name().to_lowercase().contains(&needle)))
    }

    async fn students_enrolled_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Student>, CampusError> {
        let tables = self.read().await;
        Ok(tables
            .students
            .select(|s| (from..=to).contains(&s.enrollment_date())))
    }

    #[instrument(skip(self, student), fields(student_id = %student.id()))]
    async fn update_student(&self, student: &Student) -> Result<(), CampusError> {
        let mut tables = self.write().await;
        let students = &mut tables.students;
        let id = student.id();

        if !students.rows.contains_key(&id.value()) {
            return Err(CampusError::student_not_found(id));
        }

        if students
            .rows
            .values()
            .any(|s| s.id() != id && s.email() == student.email())
        {
            warn!("Rejected update with duplicate email");
            return Err(CampusError::conflict(format!(
                "Student with email {} already exists",
                student.email()
            )));
        }

        students.rows.insert(id.value(), student.clone());
        debug!("Updated student");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_student(&self, id: StudentId) -> Result<bool, CampusError> {
        let mut tables = self.write().await;
        let removed = tables.students.rows.remove(&id.value()).is_some();
        // Enrollments admitted after the service's own cascade step go with the row.
        let swept = tables.enrollments.remove_where(|e| e.student_id() == id);
        debug!(removed, swept, "Deleted student");
        Ok(removed)
    }
}
