//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `user` - Registered users (`User`, `NewUser`)
//! - `exercise` - Logged exercise entries (`Exercise`, `NewExercise`)
//! - `log` - Log queries, storage filters and query results

mod exercise;
mod log;
mod user;

pub use exercise::{Exercise, LoggedExercise, NewExercise};
pub use log::{ExerciseFilter, ExerciseLog, LogQuery, UpperBoundMode};
pub use user::{NewUser, User};
