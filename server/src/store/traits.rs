use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewUser, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Backend-agnostic access to stored users.
///
/// Implementations assign the identifier and creation timestamp of every
/// inserted user and return users from `list` in insertion order.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// All users, oldest first. Empty when nothing has been stored.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Persist a new user and return the stored record.
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    /// Whether a round-trip to the backing store currently succeeds.
    async fn ping(&self) -> bool;
}
