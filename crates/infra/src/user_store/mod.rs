//! User persistence boundary.
//!
//! Defines the storage-agnostic `UserStore` trait plus a Postgres adapter
//! (production) and an in-memory adapter (tests/dev).

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryUserStore;
pub use postgres::PostgresUserStore;
pub use r#trait::{StoreError, UserStore};
