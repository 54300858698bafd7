use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("invalid identifier: {0}")]
    Parse(String),
    #[error("cannot associate student {student_id} with course {course_id}: {reason}")]
    Association { student_id: i64, course_id: i64, reason: String },
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i64) -> Self { Self::NotFound(format!("{} with id {} not found", entity, id)) }

    /// True for every variant that means "the identifier resolved to nothing".
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_) | ServiceError::Model(models::errors::ModelError::NotFound(_)))
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { ServiceError::Db(e.to_string()) }
}
