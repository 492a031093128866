//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal: create, find and list only
//! - Referential checks (does this user exist?) belong in `TrackerService`

pub mod exercise_repository;
pub mod user_repository;

use std::sync::Arc;
use thiserror::Error;

pub use exercise_repository::ExerciseRepository;
pub use user_repository::UserRepository;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across adapters
/// without coupling them to concrete implementations. It lives in
/// `extrack-core` so that `TrackerService` can accept it without depending on
/// `extrack-db`.
///
/// # Example
///
/// ```ignore
/// // In extrack-db factory:
/// pub fn build_repos(pool: SqlitePool) -> Repos { ... }
///
/// // In adapter bootstrap:
/// let repos = extrack_db::CoreFactory::build_repos(pool);
/// let tracker = TrackerService::new(repos);
/// ```
#[derive(Clone)]
pub struct Repos {
    /// User repository.
    pub users: Arc<dyn UserRepository>,
    /// Exercise entry repository.
    pub exercises: Arc<dyn ExerciseRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(users: Arc<dyn UserRepository>, exercises: Arc<dyn ExerciseRepository>) -> Self {
        Self { users, exercises }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (connection, I/O, malformed SQL, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored value could not be decoded into a domain type.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The store rejected a write against a declared schema constraint
    /// (required field, non-empty check, foreign key).
    ///
    /// The message names the first offending field and is shown to clients
    /// verbatim.
    #[error("{0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters map it to their own error shapes. The `Display` output of
/// `Validation` and `NotFound` is the exact client-facing message.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Caller input failed a precondition (missing, wrong type, unparseable).
    #[error("{0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),
}
