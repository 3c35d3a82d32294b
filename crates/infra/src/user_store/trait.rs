use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use usersvc_core::{NewUser, User, UserId};

/// User store operation error.
///
/// These are **infrastructure errors** as opposed to domain errors
/// (validation, identifier format), which are caught before the store is
/// reached.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No row exists for the requested id.
    #[error("user not found")]
    NotFound,

    /// Any other storage-level failure (connection, constraint, decode).
    #[error("{0}")]
    Database(String),
}

/// Persistence boundary for user records.
///
/// Implementations must:
/// - let the store assign the identifier on `create`
/// - bind every user-supplied value as a parameter (never splice into SQL)
/// - return `StoreError::NotFound` (not `Database`) when a lookup misses
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert one row and return it with its assigned id.
    async fn create(&self, new_user: &NewUser) -> Result<User, StoreError>;

    /// Single-row lookup by primary key.
    async fn get_by_id(&self, id: UserId) -> Result<User, StoreError>;
}

#[async_trait]
impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    async fn create(&self, new_user: &NewUser) -> Result<User, StoreError> {
        (**self).create(new_user).await
    }

    async fn get_by_id(&self, id: UserId) -> Result<User, StoreError> {
        (**self).get_by_id(id).await
    }
}
