//! User repository trait definition.
//!
//! This port defines the interface for user persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewUser, User};

/// Repository for user persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - The store assigns identifiers; callers never supply one
/// - No uniqueness on `username`: two users may share a name
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user.
    ///
    /// Returns the persisted user with its freshly assigned ID.
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;

    /// Find a user by ID.
    ///
    /// Returns `Ok(None)` when no user has this ID, including IDs that are
    /// not in the store's identifier format.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError>;

    /// List all users in creation order.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;
}
