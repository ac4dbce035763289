use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{NewUser, User};
use crate::store::traits::{StoreError, UserStore};

/// A process-local store backed by a `Vec`.
///
/// Used when no database is configured and throughout the tests. Contents are
/// lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let user = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            created_at: Utc::now(),
        };
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn ping(&self) -> bool {
        true
    }
}
