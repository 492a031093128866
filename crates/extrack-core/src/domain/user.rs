//! User domain types.

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The identifier is assigned by the store at creation and is opaque to
/// callers. Users are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

/// Data for registering a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
}
