use sea_orm::{AccessMode, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, TransactionTrait};

use crate::errors::ServiceError;

/// Read transaction; read-only on Postgres, plain elsewhere (SQLite has no per-transaction access mode).
pub(crate) async fn begin_read(db: &DatabaseConnection) -> Result<DatabaseTransaction, ServiceError> {
    let access = if db.get_database_backend() == DbBackend::Postgres { Some(AccessMode::ReadOnly) } else { None };
    Ok(db.begin_with_config(None, access).await?)
}

pub(crate) async fn begin_write(db: &DatabaseConnection) -> Result<DatabaseTransaction, ServiceError> {
    Ok(db.begin().await?)
}
