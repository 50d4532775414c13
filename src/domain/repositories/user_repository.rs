use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::user::value_objects::Username;

/// Operator account
///
/// The password hash and session version are never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: Username,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Session tokens must carry this version to be accepted
    #[serde(skip_serializing)]
    pub session_version: i64,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Builds a new user record from an already hashed password
    pub fn new(username: Username, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            session_version: 0,
            created_at: Utc::now(),
        }
    }
}

/// Repository trait for operator accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    ///
    /// Fails with `DuplicateUsername` if the username is taken.
    async fn create(&self, user: &User) -> Result<Uuid, RepositoryError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Find a user by username
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<User>, RepositoryError>;

    /// Invalidate every session issued to the user so far
    ///
    /// Fails with `NotFound` if the user does not exist.
    async fn end_sessions(&self, id: Uuid) -> Result<(), RepositoryError>;
}
