//! Postgres-backed user store.
//!
//! ## Error Mapping
//!
//! SQLx errors are mapped to `StoreError` as follows:
//!
//! | SQLx Error  | StoreError  | Scenario |
//! |-------------|-------------|----------|
//! | RowNotFound | `NotFound`  | `fetch_one` matched no row |
//! | Database    | `Database`  | constraint violations, missing table, etc. |
//! | PoolClosed  | `Database`  | connection pool was closed |
//! | Other       | `Database`  | network errors, decode failures, etc. |
//!
//! Lookups use `fetch_optional`, so a miss is reported as `NotFound` without
//! going through the error path at all.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::{Span, instrument};

use usersvc_core::{NewUser, User, UserId};

use super::r#trait::{StoreError, UserStore};

/// Postgres-backed user store.
///
/// ## Thread Safety
///
/// `PgPool` is internally reference counted and `Send + Sync`; cloning the
/// store is cheap and every clone shares the same pool.
///
/// ## Schema
///
/// Expects a pre-existing `users(id BIGSERIAL PRIMARY KEY, name, age,
/// department)` table. See `sql/users.sql`.
#[derive(Debug, Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[derive(Debug)]
struct UserRow {
    id: i64,
    name: String,
    age: i32,
    department: String,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for UserRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(UserRow {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            age: row.try_get("age")?,
            department: row.try_get("department")?,
        })
    }
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = UserId::new(row.id)
            .map_err(|e| StoreError::Database(format!("corrupt users row: {e}")))?;
        Ok(User {
            id,
            name: row.name,
            age: row.age,
            department: row.department,
        })
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    #[instrument(skip(self, new_user), fields(user_id = tracing::field::Empty), err)]
    async fn create(&self, new_user: &NewUser) -> Result<User, StoreError> {
        let raw_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (name, age, department)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(new_user.name())
        .bind(new_user.age())
        .bind(new_user.department())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_user", e))?;

        let id = UserId::new(raw_id)
            .map_err(|e| StoreError::Database(format!("store returned bad id: {e}")))?;
        Span::current().record("user_id", id.get());

        Ok(new_user.clone().into_user(id))
    }

    #[instrument(skip(self), fields(user_id = %id), err)]
    async fn get_by_id(&self, id: UserId) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, age, department
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_user_by_id", e))?;

        row.ok_or(StoreError::NotFound)?.try_into()
    }
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        sqlx::Error::Database(db_err) => {
            StoreError::Database(format!("database error in {}: {}", operation, db_err.message()))
        }
        sqlx::Error::PoolClosed => {
            StoreError::Database(format!("connection pool closed in {}", operation))
        }
        other => StoreError::Database(format!("sqlx error in {}: {}", operation, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert_eq!(
            map_sqlx_error("get_user_by_id", sqlx::Error::RowNotFound),
            StoreError::NotFound
        );
    }

    #[test]
    fn pool_closed_maps_to_database_error() {
        let err = map_sqlx_error("create_user", sqlx::Error::PoolClosed);
        assert_eq!(
            err,
            StoreError::Database("connection pool closed in create_user".to_string())
        );
    }

    #[test]
    fn non_positive_row_id_is_rejected() {
        let row = UserRow {
            id: 0,
            name: "Ana".to_string(),
            age: 30,
            department: "Eng".to_string(),
        };
        assert!(matches!(User::try_from(row), Err(StoreError::Database(_))));
    }
}
