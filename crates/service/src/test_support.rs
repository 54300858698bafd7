#![cfg(test)]
use migration::MigratorTrait;
use models::course::{CourseFields, CourseStore};
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory database; each test gets its own.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub fn course_fields(name: &str, category: &str, teacher: &str) -> CourseFields {
    CourseFields { name: name.into(), category: category.into(), teacher: teacher.into() }
}

/// Insert a course directly through the store, bypassing the services.
pub async fn seed_course(db: &DatabaseConnection, name: &str) -> Result<models::course::Model, anyhow::Error> {
    Ok(CourseStore::new(db).insert(course_fields(name, "Science", "Alice")).await?)
}
