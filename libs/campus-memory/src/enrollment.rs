//! `EnrollmentRepository` over the in-memory tables

use campus_domain::{
    CampusError, CourseId, Enrollment, EnrollmentId, EnrollmentRepository, EnrollmentStatus,
    NewEnrollment, StudentId,
};
use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use crate::store::InMemoryStore;

impl EnrollmentRepository for InMemoryStore {
    #[instrument(
        skip(self, enrollment),
        fields(student_id = %enrollment.student_id, course_id = %enrollment.course_id)
    )]
    async fn insert_enrollment(
        &self,
        enrollment: NewEnrollment,
    ) -> Result<Enrollment, CampusError> {
        let mut tables = self.write().await;

        // Parents are re-checked under the same guard a cascade delete takes.
        if !tables.students.rows.contains_key(&enrollment.student_id.value()) {
            warn!("Rejected enrollment for a missing student");
            return Err(CampusError::student_not_found(enrollment.student_id));
        }
        if !tables.courses.rows.contains_key(&enrollment.course_id.value()) {
            warn!("Rejected enrollment for a missing course");
            return Err(CampusError::course_not_found(enrollment.course_id));
        }

        let enrollments = &mut tables.enrollments;
        if enrollments.rows.values().any(|e| {
            e.student_id() == enrollment.student_id && e.course_id() == enrollment.course_id
        }) {
            warn!("Rejected duplicate enrollment pair");
            return Err(CampusError::conflict(format!(
                "Student {} is already enrolled in course {}",
                enrollment.student_id, enrollment.course_id
            )));
        }

        let id = EnrollmentId::new(enrollments.next_id());
        let stored = Enrollment::from_new(id, enrollment);
        enrollments.rows.insert(id.value(), stored.clone());

        info!(enrollment_id = %id, "Stored enrollment");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn find_enrollment(&self, id: EnrollmentId) -> Result<Option<Enrollment>, CampusError> {
        let tables = self.read().await;
        let found = tables.enrollments.rows.get(&id.value()).cloned();
        debug!(found = found.is_some(), "Looked up enrollment");
        Ok(found)
    }

    async fn find_enrollment_by_pair(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<Option<Enrollment>, CampusError> {
        let tables = self.read().await;
        Ok(tables
            .enrollments
            .rows
            .values()
            .find(|e| e.student_id() == student_id && e.course_id() == course_id)
            .cloned())
    }

    async fn enrollment_exists(&self, id: EnrollmentId) -> Result<bool, CampusError> {
        Ok(self.read().await.enrollments.rows.contains_key(&id.value()))
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, CampusError> {
        Ok(self.read().await.enrollments.select(|_| true))
    }

    async fn enrollments_by_student(
        &self,
        student_id: StudentId,
        status: Option<EnrollmentStatus>,
    ) -> Result<Vec<Enrollment>, CampusError> {
        let tables = self.read().await;
        Ok(tables.enrollments.select(|e| {
            e.student_id() == student_id && status.map_or(true, |s| e.status() == s)
        }))
    }

    async fn enrollments_by_course(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<Enrollment>, CampusError> {
        let tables = self.read().await;
        Ok(tables.enrollments.select(|e| e.course_id() == course_id))
    }

    async fn enrollments_by_status(
        &self,
        status: EnrollmentStatus,
    ) -> Result<Vec<Enrollment>, CampusError> {
        let tables = self.read().await;
        Ok(tables.enrollments.select(|e| e.status() == status))
    }

    async fn enrollments_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Enrollment>, CampusError> {
        let tables = self.read().await;
        Ok(tables
            .enrollments
            .select(|e| (from..=to).contains(&e.enrollment_date())))
    }

    async fn count_by_student(&self, student_id: StudentId) -> Result<u64, CampusError> {
        let tables = self.read().await;
        let count = tables
            .enrollments
            .rows
            .values()
            .filter(|e| e.student_id() == student_id)
            .count();
        Ok(count as u64)
    }

    async fn count_by_course(&self, course_id: CourseId) -> Result<u64, CampusError> {
        let tables = self.read().await;
        let count = tables
            .enrollments
            .rows
            .values()
            .filter(|e| e.course_id() == course_id)
            .count();
        Ok(count as u64)
    }

    #[instrument(skip(self, enrollment), fields(enrollment_id = %enrollment.id()))]
    async fn update_enrollment(&self, enrollment: &Enrollment) -> Result<(), CampusError> {
        let mut tables = self.write().await;
        match tables.enrollments.rows.get_mut(&enrollment.id().value()) {
            Some(row) => {
                *row = enrollment.clone();
                debug!(status = %enrollment.status(), "Updated enrollment");
                Ok(())
            }
            None => Err(CampusError::enrollment_not_found(enrollment.id())),
        }
    }

    #[instrument(skip(self))]
    async fn delete_enrollment(&self, id: EnrollmentId) -> Result<bool, CampusError> {
        let removed = self
            .write()
            .await
            .enrollments
            .rows
            .remove(&id.value())
            .is_some();
        debug!(removed, "Deleted enrollment");
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn delete_enrollments_by_student(&self, student_id: StudentId) -> Result<u64, CampusError> {
        let removed = self
            .write()
            .await
            .enrollments
            .remove_where(|e| e.student_id() == student_id);
        info!(removed, "Removed enrollments of student");
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn delete_enrollments_by_course(&self, course_id: CourseId) -> Result<u64, CampusError> {
        let removed = self
            .write()
            .await
            .enrollments
            .remove_where(|e| e.course_id() == course_id);
        info!(removed, "Removed enrollments of course");
        Ok(removed)
    }
}
