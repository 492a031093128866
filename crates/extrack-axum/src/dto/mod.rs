//! Data Transfer Objects (DTOs) for HTTP API contract.
//!
//! These types define the stable HTTP API contract with explicit serialization
//! control. They decouple internal domain types from external API representation.

pub mod request;
pub mod response;

pub use request::{AddExerciseRequest, FieldValue, LogParams, NewUserRequest};
pub use response::{ExerciseAddedDto, ExerciseLogDto, LogEntryDto, UserDto};
