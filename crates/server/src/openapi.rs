use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct CourseDoc {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub teacher: String,
}

#[derive(ToSchema)]
pub struct CourseInputDoc {
    pub name: String,
    pub category: String,
    pub teacher: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct StudentDoc {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub age: i32,
    pub course: Option<CourseDoc>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct StudentInputDoc {
    pub name: String,
    pub last_name: String,
    pub age: i32,
    /// Integer id sent as text
    pub course_id: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct StudentWithoutCourseInputDoc {
    pub name: String,
    pub last_name: String,
    pub age: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::courses::find_by_id,
        crate::routes::courses::find_all,
        crate::routes::courses::create,
        crate::routes::courses::update,
        crate::routes::courses::delete_by_id,
        crate::routes::students::find_by_id,
        crate::routes::students::find_all,
        crate::routes::students::create,
        crate::routes::students::create_without_course,
        crate::routes::students::associate,
        crate::routes::students::delete_by_id,
        crate::routes::students::update,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            CourseDoc,
            CourseInputDoc,
            StudentDoc,
            StudentInputDoc,
            StudentWithoutCourseInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "courses"),
        (name = "students")
    )
)]
pub struct ApiDoc;
