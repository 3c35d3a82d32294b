use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use usersvc_core::{NewUser, User, UserId};

use super::r#trait::{StoreError, UserStore};

/// In-memory user store.
///
/// Intended for tests/dev. Ids start at 1 and increase by one per insert,
/// like a `BIGSERIAL` column.
#[derive(Debug)]
pub struct InMemoryUserStore {
    rows: RwLock<BTreeMap<UserId, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored users. Still counts rows after a writer panicked.
    pub fn len(&self) -> usize {
        self.rows.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, new_user: &NewUser) -> Result<User, StoreError> {
        let raw = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = UserId::new(raw).map_err(|e| StoreError::Database(e.to_string()))?;
        let user = new_user.clone().into_user(id);

        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::Database("lock poisoned".to_string()))?;
        rows.insert(id, user.clone());

        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> Result<User, StoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::Database("lock poisoned".to_string()))?;
        rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }
}
