use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

use models::course::{self, CourseFields, CourseStore};
use models::student::StudentStore;
use crate::errors::ServiceError;
use crate::tx::{begin_read, begin_write};

/// Course CRUD. The only place that decides whether a course exists.
#[derive(Clone)]
pub struct CourseService {
    db: DatabaseConnection,
}

impl CourseService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Get a course by id.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<course::Model, ServiceError> {
        let txn = begin_read(&self.db).await?;
        let found = CourseStore::new(&txn)
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("course", id))?;
        txn.commit().await?;
        Ok(found)
    }

    /// List every course in store order.
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<course::Model>, ServiceError> {
        let txn = begin_read(&self.db).await?;
        let all = CourseStore::new(&txn).find_all().await?;
        txn.commit().await?;
        Ok(all)
    }

    /// Persist a new course; the returned model carries the assigned id.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CourseFields) -> Result<course::Model, ServiceError> {
        let txn = begin_write(&self.db).await?;
        let created = CourseStore::new(&txn).insert(input).await?;
        txn.commit().await?;
        info!(course_id = created.id, "course_created");
        Ok(created)
    }

    /// Delete a course. Students enrolled in it stay, with their course cleared.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        let txn = begin_write(&self.db).await?;
        let courses = CourseStore::new(&txn);
        if !courses.exists_by_id(id).await? {
            return Err(ServiceError::not_found("course", id));
        }
        let detached = StudentStore::new(&txn).clear_course(id).await?;
        courses.delete_by_id(id).await?;
        txn.commit().await?;
        info!(course_id = id, detached_students = detached, "course_deleted");
        Ok(())
    }

    /// Overwrite name, category and teacher of an existing course.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: CourseFields) -> Result<course::Model, ServiceError> {
        let txn = begin_write(&self.db).await?;
        let courses = CourseStore::new(&txn);
        let mut existing = courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("course", id))?;
        existing.apply(patch);
        let updated = courses.update(existing).await?;
        txn.commit().await?;
        info!(course_id = updated.id, "course_updated");
        Ok(updated)
    }
}
