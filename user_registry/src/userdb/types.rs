use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single user record as stored and served
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct User {
    /// Unique record identifier, assigned at creation and never changed
    pub id: String,
    /// Display name, free-form text
    pub name: String,
    /// Contact address, free-form text (no format or uniqueness checks)
    pub email: String,
}

impl User {
    /// Create a record from its parts
    pub fn new(id: String, name: String, email: String) -> Self {
        Self { id, name, email }
    }
}
