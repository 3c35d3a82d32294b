//! `usersvc-core` — user data model and input validation.
//!
//! This crate contains **pure domain** types (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use id::UserId;
pub use user::{NewUser, User};
