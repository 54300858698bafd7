//! Service layer providing the Course and Student operations on top of models.
//! - Every operation runs in its own transaction; writes commit atomically.
//! - Reuses entity definitions and stores from the `models` crate.

pub mod errors;
pub mod ids;
pub mod course_service;
pub mod student_service;
mod tx;
#[cfg(test)]
pub mod test_support;

pub use course_service::CourseService;
pub use student_service::StudentService;
