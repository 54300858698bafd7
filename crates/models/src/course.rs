use sea_orm::{entity::prelude::*, ActiveValue, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, student};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub category: String,
    pub teacher: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Student,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Student => Entity::has_many(student::Entity).into() }
    }
}

impl Related<student::Entity> for Entity {
    fn to() -> RelationDef { Relation::Student.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Caller-writable columns of a course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFields {
    pub name: String,
    pub category: String,
    pub teacher: String,
}

impl Model {
    /// Overwrite every mutable column, keeping the id.
    pub fn apply(&mut self, fields: CourseFields) {
        self.name = fields.name;
        self.category = fields.category;
        self.teacher = fields.teacher;
    }
}

/// Course persistence over any connection or open transaction.
pub struct CourseStore<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CourseStore<'a, C> {
    pub fn new(conn: &'a C) -> Self { Self { conn } }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, ModelError> {
        let n = Entity::find_by_id(id).count(self.conn).await?;
        Ok(n > 0)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Model>, ModelError> {
        Ok(Entity::find_by_id(id).one(self.conn).await?)
    }

    /// All courses in insertion (id) order.
    pub async fn find_all(&self) -> Result<Vec<Model>, ModelError> {
        Ok(Entity::find().order_by_asc(Column::Id).all(self.conn).await?)
    }

    pub async fn insert(&self, fields: CourseFields) -> Result<Model, ModelError> {
        let am = ActiveModel {
            id: ActiveValue::NotSet,
            name: Set(fields.name),
            category: Set(fields.category),
            teacher: Set(fields.teacher),
        };
        Ok(am.insert(self.conn).await?)
    }

    pub async fn update(&self, model: Model) -> Result<Model, ModelError> {
        let am = ActiveModel {
            id: ActiveValue::Unchanged(model.id),
            name: Set(model.name),
            category: Set(model.category),
            teacher: Set(model.teacher),
        };
        Ok(am.update(self.conn).await?)
    }

    /// Returns the number of rows removed.
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, ModelError> {
        let res = Entity::delete_by_id(id).exec(self.conn).await?;
        Ok(res.rows_affected)
    }
}
