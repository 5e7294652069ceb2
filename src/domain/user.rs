use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::user_actor::UserError;

/// Represents a registered user in the system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Validated payload for creating a new user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

impl UserCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Body of `POST /api/users` as it arrives on the wire.
///
/// Fields stay untyped so that a number or `null` is reported as a missing
/// field rather than as a malformed body.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

impl CreateUserRequest {
    /// Checks `name` first, then `email`. The first failure wins.
    pub fn validate(self) -> Result<UserCreate, UserError> {
        let name = required_text(self.name)
            .ok_or_else(|| UserError::ValidationError("Name is required".to_string()))?;
        let email = required_text(self.email)
            .ok_or_else(|| UserError::ValidationError("Email is required".to_string()))?;
        Ok(UserCreate { name, email })
    }
}

fn required_text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Users present when the process starts.
pub fn seed_users() -> Vec<UserCreate> {
    vec![
        UserCreate::new("John Doe", "john@example.com"),
        UserCreate::new("Jane Smith", "jane@example.com"),
    ]
}
