use sea_orm::DatabaseConnection;
use tracing::{info, instrument, warn};

use models::course::{self, CourseStore};
use models::student::{self, StudentFields, StudentStore};
use crate::errors::ServiceError;
use crate::tx::{begin_read, begin_write};

/// Student CRUD plus linking a student to a course.
#[derive(Clone)]
pub struct StudentService {
    db: DatabaseConnection,
}

impl StudentService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Get a student by id. The course reference is not loaded; see [`Self::course_of`].
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<student::Model, ServiceError> {
        let txn = begin_read(&self.db).await?;
        let found = StudentStore::new(&txn)
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("student", id))?;
        txn.commit().await?;
        Ok(found)
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<student::Model>, ServiceError> {
        let txn = begin_read(&self.db).await?;
        let all = StudentStore::new(&txn).find_all().await?;
        txn.commit().await?;
        Ok(all)
    }

    /// Persist a new student. A supplied `course_id` is trusted as-is; callers
    /// resolve it through `CourseService` first.
    #[instrument(skip(self, input), fields(name = %input.name, course_id = ?input.course_id))]
    pub async fn create(&self, input: StudentFields) -> Result<student::Model, ServiceError> {
        let txn = begin_write(&self.db).await?;
        let created = StudentStore::new(&txn).insert(input).await?;
        txn.commit().await?;
        info!(student_id = created.id, course_id = ?created.course_id, "student_created");
        Ok(created)
    }

    /// Persist a new student that is not enrolled anywhere, whatever `course_id` says.
    pub async fn create_without_course(&self, input: StudentFields) -> Result<student::Model, ServiceError> {
        self.create(StudentFields { course_id: None, ..input }).await
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        let txn = begin_write(&self.db).await?;
        let students = StudentStore::new(&txn);
        if !students.exists_by_id(id).await? {
            return Err(ServiceError::not_found("student", id));
        }
        students.delete_by_id(id).await?;
        txn.commit().await?;
        info!(student_id = id, "student_deleted");
        Ok(())
    }

    /// Overwrite name, last name and age of an existing student and persist
    /// the merged record. `patch.course_id` replaces the course reference when
    /// present (it must resolve); when absent the current reference is kept.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: StudentFields) -> Result<student::Model, ServiceError> {
        let txn = begin_write(&self.db).await?;
        let students = StudentStore::new(&txn);
        let mut existing = students
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("student", id))?;

        existing.name = patch.name;
        existing.last_name = patch.last_name;
        existing.age = patch.age;
        if let Some(course_id) = patch.course_id {
            if !CourseStore::new(&txn).exists_by_id(course_id).await? {
                return Err(ServiceError::not_found("course", course_id));
            }
            existing.course_id = Some(course_id);
        }

        let updated = students.update(existing).await?;
        txn.commit().await?;
        info!(student_id = updated.id, course_id = ?updated.course_id, "student_updated");
        Ok(updated)
    }

    /// Enroll a student in a course. Both ids are resolved and the student is
    /// written inside one transaction, so a missing course leaves the student
    /// untouched. A missing endpoint yields [`ServiceError::Association`].
    #[instrument(skip(self))]
    pub async fn associate(&self, student_id: i64, course_id: i64) -> Result<student::Model, ServiceError> {
        match self.link(student_id, course_id).await {
            Ok(s) => {
                info!(student_id, course_id, "student_associated_with_course");
                Ok(s)
            }
            Err(e) => {
                warn!(student_id, course_id, error = %e, "association_failed");
                Err(e)
            }
        }
    }

    async fn link(&self, student_id: i64, course_id: i64) -> Result<student::Model, ServiceError> {
        let missing = |reason: ServiceError| ServiceError::Association {
            student_id,
            course_id,
            reason: reason.to_string(),
        };

        let txn = begin_write(&self.db).await?;
        let students = StudentStore::new(&txn);
        let mut existing = students
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| missing(ServiceError::not_found("student", student_id)))?;
        let target = CourseStore::new(&txn)
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| missing(ServiceError::not_found("course", course_id)))?;

        existing.course_id = Some(target.id);
        let updated = students.update(existing).await?;
        txn.commit().await?;
        Ok(updated)
    }

    /// Resolve the course a student points at, on demand.
    pub async fn course_of(&self, student: &student::Model) -> Result<Option<course::Model>, ServiceError> {
        Ok(StudentStore::new(&self.db).find_course(student).await?)
    }
}
