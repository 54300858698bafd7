//! Create `student` table with a nullable FK to `course`.
//!
//! Deleting a course leaves its students in place with `course_id` cleared.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(big_integer(Student::Id).auto_increment().primary_key())
                    .col(string_len(Student::Name, 255).not_null())
                    .col(string_len(Student::LastName, 255).not_null())
                    .col(integer(Student::Age).not_null())
                    .col(big_integer_null(Student::CourseId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_course")
                            .from(Student::Table, Student::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Student::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Student { Table, Id, Name, LastName, Age, CourseId }

#[derive(DeriveIden)]
enum Course { Table, Id }
