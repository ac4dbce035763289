use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tokio::sync::OnceCell;

use crate::models::{NewUser, User};
use crate::store::traits::{StoreError, UserStore};

const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// PostgreSQL-backed store.
///
/// The pool is created lazily: no connection is opened until the first query,
/// so the service can start (and report itself as disconnected) while the
/// database is still unreachable. The schema migration is attempted again on
/// every operation until it has succeeded once.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
    migrated: Arc<OnceCell<()>>,
}

impl PgUserStore {
    pub fn connect_lazy(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy(database_url)?;

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            pool,
            migrated: Arc::new(OnceCell::new()),
        }
    }

    /// Create the `users` table if it does not exist yet.
    ///
    /// Returns immediately once a migration has succeeded on this store.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        self.migrated
            .get_or_try_init(|| async {
                sqlx::migrate!("./migrations").run(&self.pool).await?;
                tracing::info!("Database schema is up to date");
                Ok::<(), StoreError>(())
            })
            .await?;
        Ok(())
    }

    pub fn is_migrated(&self) -> bool {
        self.migrated.initialized()
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.migrate().await?;

        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at FROM users ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        self.migrate().await?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email) VALUES ($1, $2) \
             RETURNING id, name, email, created_at",
        )
        .bind(user.name)
        .bind(user.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Connected only once the schema exists and a round-trip succeeds.
    async fn ping(&self) -> bool {
        if let Err(e) = self.migrate().await {
            tracing::debug!(error = %e, "Database migration pending");
            return false;
        }

        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Database ping failed");
                false
            }
        }
    }
}
