use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e {
            // update() against a primary key that no longer exists
            DbErr::RecordNotUpdated => ModelError::NotFound("no row matched the primary key".into()),
            other => ModelError::Db(other.to_string()),
        }
    }
}
