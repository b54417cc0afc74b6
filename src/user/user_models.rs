use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::ValidateEmail;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// How a caller refers to a user in query parameters: a numeric id or an
/// email address. Classified once at the boundary, then resolved against the
/// user store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    ById(i64),
    ByEmail(String),
}

impl Identifier {
    /// Email-shaped input resolves by email, integer input resolves by id.
    /// Anything else returns `None`; callers treat that as an unknown user
    /// rather than a malformed request.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.validate_email() {
            Some(Identifier::ByEmail(raw.to_string()))
        } else {
            raw.parse::<i64>().ok().map(Identifier::ById)
        }
    }
}
