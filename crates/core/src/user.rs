//! The user record and its validated create input.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::UserId;

pub const NAME_REQUIRED: &str = "name is required";
pub const AGE_NOT_POSITIVE: &str = "age must be > 0";
pub const DEPARTMENT_REQUIRED: &str = "department is required";

/// A persisted user as stored in the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: i32,
    pub department: String,
}

/// Validated input for creating a user.
///
/// Fields are private so the only way to get one is [`NewUser::new`]; every
/// value that reaches storage has been trimmed and checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    age: i32,
    department: String,
}

impl NewUser {
    /// Trim `name`/`department` and validate all three fields.
    ///
    /// Checks run in order: name, age, department. The first failure wins.
    pub fn new(name: &str, age: i32, department: &str) -> DomainResult<Self> {
        let name = name.trim();
        let department = department.trim();

        if name.is_empty() {
            return Err(DomainError::validation(NAME_REQUIRED));
        }
        if age <= 0 {
            return Err(DomainError::validation(AGE_NOT_POSITIVE));
        }
        if department.is_empty() {
            return Err(DomainError::validation(DEPARTMENT_REQUIRED));
        }

        Ok(Self {
            name: name.to_owned(),
            age,
            department: department.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    /// Attach the store-assigned identifier.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            age: self.age,
            department: self.department,
        }
    }
}
