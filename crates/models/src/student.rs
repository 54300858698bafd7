use sea_orm::{entity::prelude::*, sea_query::Expr, ActiveValue, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{course, errors::ModelError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub age: i32,
    /// Not joined on read; resolve with `StudentStore::find_course`.
    pub course_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Course,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Course => Entity::belongs_to(course::Entity)
                .from(Column::CourseId)
                .to(course::Column::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .into(),
        }
    }
}

impl Related<course::Entity> for Entity {
    fn to() -> RelationDef { Relation::Course.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFields {
    pub name: String,
    pub last_name: String,
    pub age: i32,
    pub course_id: Option<i64>,
}

/// Student persistence over any connection or open transaction.
pub struct StudentStore<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> StudentStore<'a, C> {
    pub fn new(conn: &'a C) -> Self { Self { conn } }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, ModelError> {
        let n = Entity::find_by_id(id).count(self.conn).await?;
        Ok(n > 0)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Model>, ModelError> {
        Ok(Entity::find_by_id(id).one(self.conn).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Model>, ModelError> {
        Ok(Entity::find().order_by_asc(Column::Id).all(self.conn).await?)
    }

    /// Load the referenced course, if any.
    pub async fn find_course(&self, student: &Model) -> Result<Option<course::Model>, ModelError> {
        if student.course_id.is_none() {
            return Ok(None);
        }
        Ok(student.find_related(course::Entity).one(self.conn).await?)
    }

    pub async fn insert(&self, fields: StudentFields) -> Result<Model, ModelError> {
        let am = ActiveModel {
            id: ActiveValue::NotSet,
            name: Set(fields.name),
            last_name: Set(fields.last_name),
            age: Set(fields.age),
            course_id: Set(fields.course_id),
        };
        Ok(am.insert(self.conn).await?)
    }

    pub async fn update(&self, model: Model) -> Result<Model, ModelError> {
        let am = ActiveModel {
            id: ActiveValue::Unchanged(model.id),
            name: Set(model.name),
            last_name: Set(model.last_name),
            age: Set(model.age),
            course_id: Set(model.course_id),
        };
        Ok(am.update(self.conn).await?)
    }

    /// Null out every reference to `course_id`; returns affected rows.
    pub async fn clear_course(&self, course_id: i64) -> Result<u64, ModelError> {
        let res = Entity::update_many()
            .col_expr(Column::CourseId, Expr::value(Option::<i64>::None))
            .filter(Column::CourseId.eq(course_id))
            .exec(self.conn)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<u64, ModelError> {
        let res = Entity::delete_by_id(id).exec(self.conn).await?;
        Ok(res.rows_affected)
    }
}
