use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

use server::{routes, state::AppState};

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

async fn build_app() -> anyhow::Result<Router> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(routes::build_router(AppState::new(db), cors()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&b)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

async fn create_math(app: &Router) -> anyhow::Result<Value> {
    let (status, body) = send(app, "POST", "/courses", Some(json!({"name": "Math", "category": "Science", "teacher": "Alice"}))).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(body)
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn test_course_lifecycle() -> anyhow::Result<()> {
    let app = build_app().await?;

    let course = create_math(&app).await?;
    assert_eq!(course["id"], 1);

    let (status, found) = send(&app, "GET", "/courses/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["name"], "Math");
    assert_eq!(found["category"], "Science");
    assert_eq!(found["teacher"], "Alice");

    let (status, updated) = send(
        &app,
        "PUT",
        "/courses/1",
        Some(json!({"name": "Algebra", "category": "Mathematics", "teacher": "Bruno"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": 1, "name": "Algebra", "category": "Mathematics", "teacher": "Bruno"}));

    let (status, all) = send(&app, "GET", "/courses", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().map(Vec::len), Some(1));

    let (status, body) = send(&app, "DELETE", "/courses/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "course with id 1 successfully deleted!");

    let (status, body) = send(&app, "GET", "/courses/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn test_malformed_id_is_bad_request_not_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    for uri in ["/courses/abc", "/students/1x"] {
        let (status, body) = send(&app, "GET", uri, None).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "Bad Request");
    }
    let (status, _) = send(&app, "DELETE", "/courses/one", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_create_student_with_course() -> anyhow::Result<()> {
    let app = build_app().await?;
    let course = create_math(&app).await?;

    let (status, student) = send(
        &app,
        "POST",
        "/students",
        Some(json!({"name": "Bob", "lastName": "Lee", "age": 20, "courseId": "1"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(student["name"], "Bob");
    assert_eq!(student["lastName"], "Lee");
    assert_eq!(student["age"], 20);
    assert_eq!(student["course"]["id"], course["id"]);

    let (status, found) = send(&app, "GET", &format!("/students/{}", student["id"]), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["course"]["name"], "Math");
    Ok(())
}

#[tokio::test]
async fn test_create_student_without_course_id() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, eve) = send(&app, "POST", "/students", Some(json!({"name": "Eve", "lastName": "K", "age": 22}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(eve["course"], Value::Null);

    let (status, other) =
        send(&app, "POST", "/students/without-course", Some(json!({"name": "Ann", "lastName": "M", "age": 30}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(other["course"], Value::Null);

    let (_, all) = send(&app, "GET", "/students", None).await?;
    assert_eq!(all.as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn test_create_student_with_unknown_course_is_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, _) =
        send(&app, "POST", "/students", Some(json!({"name": "Bob", "lastName": "Lee", "age": 20, "courseId": "5"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = send(&app, "GET", "/students", None).await?;
    assert_eq!(all, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_delete_missing_student_is_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, "POST", "/students/without-course", Some(json!({"name": "Ann", "lastName": "M", "age": 30}))).await?;

    let (status, body) = send(&app, "DELETE", "/students/999", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");

    let (_, all) = send(&app, "GET", "/students", None).await?;
    assert_eq!(all.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn test_delete_student() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (_, s) = send(&app, "POST", "/students/without-course", Some(json!({"name": "Ann", "lastName": "M", "age": 30}))).await?;

    let (status, body) = send(&app, "DELETE", &format!("/students/{}", s["id"]), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], format!("student with id {} successfully deleted!", s["id"]));
    Ok(())
}

#[tokio::test]
async fn test_association_success_and_failure_messages() -> anyhow::Result<()> {
    let app = build_app().await?;
    create_math(&app).await?;
    let (_, s) = send(&app, "POST", "/students/without-course", Some(json!({"name": "Bob", "lastName": "Lee", "age": 20}))).await?;
    assert_eq!(s["id"], 1);

    let (status, body) = send(&app, "POST", "/students/1/course/999", None).await?;
    assert_eq!(status, StatusCode::OK);
    let msg = body["message"].as_str().unwrap_or_default();
    assert!(msg.starts_with("Failed to associate Student with Course. Reason: "), "{msg}");
    assert!(msg.contains("999"), "{msg}");

    let (_, unchanged) = send(&app, "GET", "/students/1", None).await?;
    assert_eq!(unchanged["course"], Value::Null);

    let (status, body) = send(&app, "POST", "/students/1/course/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student associated with Course successfully!");

    let (_, linked) = send(&app, "GET", "/students/1", None).await?;
    assert_eq!(linked["course"]["id"], 1);
    Ok(())
}

#[tokio::test]
async fn test_association_with_malformed_id_is_bad_request() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, _) = send(&app, "POST", "/students/x/course/1", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_update_student() -> anyhow::Result<()> {
    let app = build_app().await?;
    create_math(&app).await?;
    let (_, s) = send(&app, "POST", "/students", Some(json!({"name": "Bob", "lastName": "Lee", "age": 20, "courseId": "1"}))).await?;

    // courseId omitted: reference kept
    let (status, updated) =
        send(&app, "PUT", "/students/1", Some(json!({"name": "Robert", "lastName": "Lee", "age": 21}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], s["id"]);
    assert_eq!(updated["name"], "Robert");
    assert_eq!(updated["age"], 21);
    assert_eq!(updated["course"]["id"], 1);

    let (status, _) = send(
        &app,
        "PUT",
        "/students/1",
        Some(json!({"name": "Robert", "lastName": "Lee", "age": 21, "courseId": "77"})),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PUT", "/students/55", Some(json!({"name": "X", "lastName": "Y", "age": 1}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_deleting_course_detaches_students() -> anyhow::Result<()> {
    let app = build_app().await?;
    create_math(&app).await?;
    send(&app, "POST", "/students", Some(json!({"name": "Bob", "lastName": "Lee", "age": 20, "courseId": "1"}))).await?;

    let (status, _) = send(&app, "DELETE", "/courses/1", None).await?;
    assert_eq!(status, StatusCode::OK);

    let (status, s) = send(&app, "GET", "/students/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(s["course"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn test_openapi_document_served() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/students/{student_id}/course/{course_id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn test_ids_beyond_32_bits_are_lookups_not_parse_errors() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, "POST", "/students/without-course", Some(json!({"name": "Bob", "lastName": "Lee", "age": 20}))).await?;

    let (status, _) = send(&app, "GET", "/students/3000000000", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/courses/3000000000", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "POST", "/students/1/course/3000000000", None).await?;
    assert_eq!(status, StatusCode::OK);
    let msg = body["message"].as_str().unwrap_or_default();
    assert!(msg.starts_with("Failed to associate Student with Course. Reason: "), "{msg}");
    assert!(msg.contains("3000000000"), "{msg}");
    Ok(())
}
