//! Postgres-backed store tests.
//!
//! Skipped unless `DATABASE_URL` points at a reachable Postgres instance.
//! The `users` table is created if missing.

use sqlx::PgPool;

use usersvc_core::{NewUser, UserId};
use usersvc_infra::{PostgresUserStore, StoreError, UserStore, db};

const SCHEMA: &str = include_str!("../sql/users.sql");

async fn store_or_skip() -> Option<PostgresUserStore> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping postgres test");
        return None;
    };
    let pool = PgPool::connect(&url).await.expect("failed to connect to DATABASE_URL");
    db::ping(&pool).await.expect("ping failed");
    sqlx::query(SCHEMA).execute(&pool).await.expect("failed to create users table");
    Some(PostgresUserStore::new(pool))
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let Some(store) = store_or_skip().await else {
        return;
    };

    let new_user = NewUser::new(" Ana ", 30, " Eng ").unwrap();
    let created = store.create(&new_user).await.unwrap();
    assert!(created.id.get() > 0);
    assert_eq!(created.name, "Ana");
    assert_eq!(created.department, "Eng");

    let fetched = store.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn missing_id_is_not_found() {
    let Some(store) = store_or_skip().await else {
        return;
    };

    let err = store
        .get_by_id(UserId::new(i64::MAX).unwrap())
        .await
        .unwrap_err();
    assert_eq!(err, StoreError::NotFound);
}

#[tokio::test]
async fn closed_pool_surfaces_database_error() {
    let Some(store) = store_or_skip().await else {
        return;
    };
    store.pool().close().await;

    let err = store
        .create(&NewUser::new("Ana", 30, "Eng").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Database(_)), "{err:?}");
}
