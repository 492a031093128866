#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    Exercise, ExerciseFilter, ExerciseLog, LogQuery, LoggedExercise, NewExercise, NewUser,
    UpperBoundMode, User,
};
pub use ports::{CoreError, ExerciseRepository, Repos, RepositoryError, UserRepository};
pub use services::TrackerService;
pub use validation::{LogRequest, NewExerciseInput, NewUserInput};
