use serde::Deserialize;

use usersvc_core::{DomainResult, NewUser};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /api/v1/user/create`.
///
/// Every field is required and unknown fields are rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    pub name: String,
    pub age: i32,
    pub department: String,
}

impl CreateUserRequest {
    /// Trim and validate into the only shape storage accepts.
    pub fn validate(&self) -> DomainResult<NewUser> {
        NewUser::new(&self.name, self.age, &self.department)
    }
}

/// Query string of `GET /api/v1/user/get`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GetUserParams {
    pub id: Option<String>,
}

impl GetUserParams {
    /// Build from decoded query pairs. A repeated `id` keeps its first value.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let id = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "id").then_some(value));
        Self { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_are_rejected() {
        let err = serde_json::from_str::<CreateUserRequest>(
            r#"{"name":"Ana","age":30,"department":"Eng","role":"admin"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown field"), "{err}");
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert!(serde_json::from_str::<CreateUserRequest>(r#"{"name":"Ana","age":30}"#).is_err());
    }

    #[test]
    fn fractional_or_oversized_age_is_rejected() {
        for body in [
            r#"{"name":"Ana","age":30.5,"department":"Eng"}"#,
            r#"{"name":"Ana","age":2147483648,"department":"Eng"}"#,
            r#"{"name":"Ana","age":"30","department":"Eng"}"#,
        ] {
            assert!(serde_json::from_str::<CreateUserRequest>(body).is_err(), "{body}");
        }
    }

    #[test]
    fn first_id_wins_when_repeated() {
        let pairs = vec![
            ("other".to_string(), "x".to_string()),
            ("id".to_string(), "1".to_string()),
            ("id".to_string(), "2".to_string()),
        ];
        assert_eq!(GetUserParams::from_pairs(pairs).id.as_deref(), Some("1"));
    }

    #[test]
    fn absent_id_is_none() {
        let pairs = vec![("ids".to_string(), "1".to_string())];
        assert_eq!(GetUserParams::from_pairs(pairs), GetUserParams::default());
    }

    #[test]
    fn validate_trims() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"name":"  Ana ","age":30,"department":" Eng"}"#).unwrap();
        let new_user = req.validate().unwrap();
        assert_eq!(new_user.name(), "Ana");
        assert_eq!(new_user.department(), "Eng");
    }
}
