use std::sync::Arc;

use sqlx::PgPool;

use usersvc_infra::{InMemoryUserStore, PostgresUserStore, UserStore};

/// Shared handles injected into every handler.
///
/// Cloning is cheap; all clones point at the same store.
#[derive(Clone)]
pub struct AppServices {
    users: Arc<dyn UserStore>,
}

impl AppServices {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Production wiring: users live in Postgres.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(Arc::new(PostgresUserStore::new(pool)))
    }

    /// Dev/test wiring: users live in process memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()))
    }

    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices").finish_non_exhaustive()
    }
}
