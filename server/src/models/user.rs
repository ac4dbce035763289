use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::error::AppError;

/// A stored user record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Request body of `POST /api/users`.
///
/// Both fields are optional at the wire level so that a missing field turns
/// into a validation error instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// A validated user that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl CreateUserRequest {
    pub fn validate(self) -> Result<NewUser, AppError> {
        let name = required(self.name);
        let email = required(self.email);

        let mut missing = Vec::new();
        if name.is_none() {
            missing.push("name is required");
        }
        if email.is_none() {
            missing.push("email is required");
        }

        match (name, email) {
            (Some(name), Some(email)) => Ok(NewUser { name, email }),
            _ => Err(AppError::Validation(format!(
                "User validation failed: {}",
                missing.join(", ")
            ))),
        }
    }
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
