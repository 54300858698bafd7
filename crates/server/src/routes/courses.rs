use axum::{extract::{Path, State}, Json};
use serde::Deserialize;
use tracing::info;

use common::types::Message;
use models::course::{self, CourseFields};
use service::ids::parse_id;

use crate::{errors::JsonApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct CourseInput {
    pub name: String,
    pub category: String,
    pub teacher: String,
}

impl From<CourseInput> for CourseFields {
    fn from(i: CourseInput) -> Self {
        CourseFields { name: i.name, category: i.category, teacher: i.teacher }
    }
}

#[utoipa::path(
    get, path = "/courses/{course_id}", tag = "courses",
    params(("course_id" = String, Path, description = "Course id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CourseDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn find_by_id(State(state): State<AppState>, Path(course_id): Path<String>) -> Result<Json<course::Model>, JsonApiError> {
    let id = parse_id(&course_id)?;
    Ok(Json(state.courses.find_by_id(id).await?))
}

#[utoipa::path(
    get, path = "/courses", tag = "courses",
    responses((status = 200, description = "List OK", body = [crate::openapi::CourseDoc]))
)]
pub async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<course::Model>>, JsonApiError> {
    let list = state.courses.find_all().await?;
    info!(count = list.len(), "list courses");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/courses", tag = "courses",
    request_body = crate::openapi::CourseInputDoc,
    responses((status = 200, description = "Created", body = crate::openapi::CourseDoc))
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<CourseInput>) -> Result<Json<course::Model>, JsonApiError> {
    Ok(Json(state.courses.create(input.into()).await?))
}

#[utoipa::path(
    put, path = "/courses/{course_id}", tag = "courses",
    params(("course_id" = String, Path, description = "Course id")),
    request_body = crate::openapi::CourseInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CourseDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(input): Json<CourseInput>,
) -> Result<Json<course::Model>, JsonApiError> {
    let id = parse_id(&course_id)?;
    Ok(Json(state.courses.update(id, input.into()).await?))
}

#[utoipa::path(
    delete, path = "/courses/{course_id}", tag = "courses",
    params(("course_id" = String, Path, description = "Course id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_by_id(State(state): State<AppState>, Path(course_id): Path<String>) -> Result<Json<Message>, JsonApiError> {
    let id = parse_id(&course_id)?;
    state.courses.delete_by_id(id).await?;
    Ok(Json(Message::new(format!("course with id {} successfully deleted!", id))))
}
