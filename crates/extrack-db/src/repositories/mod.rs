//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_exercise_repository;
mod sqlite_user_repository;

pub use sqlite_exercise_repository::SqliteExerciseRepository;
pub use sqlite_user_repository::SqliteUserRepository;
