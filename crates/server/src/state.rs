use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{CourseService, StudentService};

/// Services shared by every handler, wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub courses: Arc<CourseService>,
    pub students: Arc<StudentService>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            courses: Arc::new(CourseService::new(db.clone())),
            students: Arc::new(StudentService::new(db)),
        }
    }
}
