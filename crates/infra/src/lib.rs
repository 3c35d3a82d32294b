//! Infrastructure layer: Postgres access, configuration.

pub mod config;
pub mod db;
pub mod user_store;

pub use config::{AppConfig, ConfigError, DatabaseConfig};
pub use user_store::{InMemoryUserStore, PostgresUserStore, StoreError, UserStore};
