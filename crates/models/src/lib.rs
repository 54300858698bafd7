pub mod errors;
pub mod db;
pub mod course;
pub mod student;

#[cfg(test)]
mod tests;
