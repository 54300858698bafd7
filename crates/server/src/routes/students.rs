use axum::{extract::{Path, State}, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use common::types::Message;
use models::{course, student::{self, StudentFields}};
use service::{errors::ServiceError, ids::parse_id};

use crate::{errors::JsonApiError, state::AppState};

pub const ASSOCIATION_OK: &str = "Student associated with Course successfully!";
pub const ASSOCIATION_FAILED: &str = "Failed to associate Student with Course. Reason: ";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    pub name: String,
    pub last_name: String,
    pub age: i32,
    #[serde(default)]
    pub course_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentWithoutCourseInput {
    pub name: String,
    pub last_name: String,
    pub age: i32,
}

/// Student as returned to clients, with its course resolved.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentOutput {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub age: i32,
    pub course: Option<course::Model>,
}

async fn render(state: &AppState, s: student::Model) -> Result<StudentOutput, JsonApiError> {
    let course = state.students.course_of(&s).await?;
    Ok(StudentOutput { id: s.id, name: s.name, last_name: s.last_name, age: s.age, course })
}

/// Parse and resolve an optional course id supplied by the client.
async fn resolve_course(state: &AppState, raw: Option<&str>) -> Result<Option<i64>, JsonApiError> {
    match raw {
        Some(raw) => {
            let id = parse_id(raw)?;
            Ok(Some(state.courses.find_by_id(id).await?.id))
        }
        None => Ok(None),
    }
}

#[utoipa::path(
    get, path = "/students/{student_id}", tag = "students",
    params(("student_id" = String, Path, description = "Student id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::StudentDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn find_by_id(State(state): State<AppState>, Path(student_id): Path<String>) -> Result<Json<StudentOutput>, JsonApiError> {
    let id = parse_id(&student_id)?;
    let s = state.students.find_by_id(id).await?;
    Ok(Json(render(&state, s).await?))
}

#[utoipa::path(
    get, path = "/students", tag = "students",
    responses((status = 200, description = "List OK", body = [crate::openapi::StudentDoc]))
)]
pub async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<StudentOutput>>, JsonApiError> {
    let all = state.students.find_all().await?;
    info!(count = all.len(), "list students");
    let mut out = Vec::with_capacity(all.len());
    for s in all {
        out.push(render(&state, s).await?);
    }
    Ok(Json(out))
}

#[utoipa::path(
    post, path = "/students", tag = "students",
    request_body = crate::openapi::StudentInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::StudentDoc),
        (status = 400, description = "Malformed course id"),
        (status = 404, description = "Course Not Found")
    )
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<StudentInput>) -> Result<Json<StudentOutput>, JsonApiError> {
    let course_id = resolve_course(&state, input.course_id.as_deref()).await?;
    let created = state
        .students
        .create(StudentFields { name: input.name, last_name: input.last_name, age: input.age, course_id })
        .await?;
    Ok(Json(render(&state, created).await?))
}

#[utoipa::path(
    post, path = "/students/without-course", tag = "students",
    request_body = crate::openapi::StudentWithoutCourseInputDoc,
    responses((status = 200, description = "Created", body = crate::openapi::StudentDoc))
)]
pub async fn create_without_course(
    State(state): State<AppState>,
    Json(input): Json<StudentWithoutCourseInput>,
) -> Result<Json<StudentOutput>, JsonApiError> {
    let created = state
        .students
        .create_without_course(StudentFields { name: input.name, last_name: input.last_name, age: input.age, course_id: None })
        .await?;
    Ok(Json(StudentOutput { id: created.id, name: created.name, last_name: created.last_name, age: created.age, course: None }))
}

/// Always answers 200 once both ids parse; the outcome is in the message.
#[utoipa::path(
    post, path = "/students/{student_id}/course/{course_id}", tag = "students",
    params(
        ("student_id" = String, Path, description = "Student id"),
        ("course_id" = String, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Success or failure message", body = crate::openapi::MessageDoc),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn associate(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(String, String)>,
) -> Result<Json<Message>, JsonApiError> {
    let sid = parse_id(&student_id)?;
    let cid = parse_id(&course_id)?;
    let message = match state.students.associate(sid, cid).await {
        Ok(_) => ASSOCIATION_OK.to_string(),
        Err(ServiceError::Association { reason, .. }) => format!("{}{}", ASSOCIATION_FAILED, reason),
        Err(e) => format!("{}{}", ASSOCIATION_FAILED, e),
    };
    Ok(Json(Message::new(message)))
}

#[utoipa::path(
    delete, path = "/students/{student_id}", tag = "students",
    params(("student_id" = String, Path, description = "Student id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_by_id(State(state): State<AppState>, Path(student_id): Path<String>) -> Result<Json<Message>, JsonApiError> {
    let id = parse_id(&student_id)?;
    state.students.delete_by_id(id).await?;
    Ok(Json(Message::new(format!("student with id {} successfully deleted!", id))))
}

#[utoipa::path(
    put, path = "/students/{student_id}", tag = "students",
    params(("student_id" = String, Path, description = "Student id")),
    request_body = crate::openapi::StudentInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::StudentDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Student or Course Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(input): Json<StudentInput>,
) -> Result<Json<StudentOutput>, JsonApiError> {
    let id = parse_id(&student_id)?;
    let course_id = resolve_course(&state, input.course_id.as_deref()).await?;
    let updated = state
        .students
        .update(id, StudentFields { name: input.name, last_name: input.last_name, age: input.age, course_id })
        .await?;
    Ok(Json(render(&state, updated).await?))
}
