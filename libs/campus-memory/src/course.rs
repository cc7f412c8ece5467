//! `CourseRepository` over the in-memory tables

use campus_domain::{CampusError, Course, CourseId, CourseInput, CourseRepository};
use tracing::{debug, info, instrument, warn};

use crate::store::InMemoryStore;

fn duplicate_code(code: &str) -> CampusError {
    CampusError::conflict(format!("Course with code {} already exists", code))
}

impl CourseRepository for InMemoryStore {
    #[instrument(skip(self, course), fields(code = %course.code))]
    async fn insert_course(&self, course: CourseInput) -> Result<Course, CampusError> {
        let mut tables = self.write().await;
        let courses = &mut tables.courses;

        if courses.rows.values().any(|c| c.code() == course.code) {
            warn!("Rejected course with duplicate code");
            return Err(duplicate_code(&course.code));
        }

        let id = CourseId::new(courses.next_id());
        let stored = Course::from_input(id, course);
        courses.rows.insert(id.value(), stored.clone());

        info!(course_id = %id, "Stored course");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn find_course(&self, id: CourseId) -> Result<Option<Course>, CampusError> {
        let tables = self.read().await;
        let found = tables.courses.rows.get(&id.value()).cloned();
        debug!(found = found.is_some(), "Looked up course");
        Ok(found)
    }

    #[instrument(skip(self))]
    async fn find_course_by_code(&self, code: &str) -> Result<Option<Course>, CampusError> {
        let tables = self.read().await;
        Ok(tables
            .courses
            .rows
            .values()
            .find(|c| c.code() == code)
            .cloned())
    }

    async fn course_exists(&self, id: CourseId) -> Result<bool, CampusError> {
        Ok(self.read().await.courses.rows.contains_key(&id.value()))
    }

    async fn list_courses(&self) -> Result<Vec<Course>, CampusError> {
        Ok(self.read().await.courses.select(|_| true))
    }

    #[instrument(skip(self))]
    async fn search_courses_by_name(&self, term: &str) -> Result<Vec<Course>, CampusError> {
        let needle = term.to_lowercase();
        let tables = self.read().await;
        Ok(tables
            .courses
            .select(|c| c.name().to_lowercase().contains(&needle)))
    }

    async fn courses_by_instructor(&self, instructor: &str) -> Result<Vec<Course>, CampusError> {
        let tables = self.read().await;
        Ok(tables.courses.select(|c| c.instructor() == instructor))
    }

    async fn courses_by_credits(&self, credits: i32) -> Result<Vec<Course>, CampusError> {
        let tables = self.read().await;
        Ok(tables.courses.select(|c| c.credits() == credits))
    }

    #[instrument(skip(self, course), fields(course_id = %course.id()))]
    async fn update_course(&self, course: &Course) -> Result<(), CampusError> {
        let mut tables = self.write().await;
        let courses = &mut tables.courses;
        let id = course.id();

        if !courses.rows.contains_key(&id.value()) {
            return Err(CampusError::course_not_found(id));
        }

        if courses
            .rows
            .values()
            .any(|c| c.id() != id && c.code() == course.code())
        {
            warn!("Rejected update with duplicate code");
            return Err(duplicate_code(course.code()));
        }

        courses.rows.insert(id.value(), course.clone());
        debug!("Updated course");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_course(&self, id: CourseId) -> Result<bool, CampusError> {
        let mut tables = self.write().await;
        let removed = tables.courses.rows.remove(&id.value()).is_some();
        // Enrollments admitted after the service's own cascade step go with the row.
        let swept = tables.enrollments.remove_where(|e| e.course_id() == id);
        debug!(removed, swept, "Deleted course");
        Ok(removed)
    }
}
