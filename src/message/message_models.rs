use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Delivery channel of a message. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Sms,
    Email,
}

impl MessageType {
    /// Accepts exactly "sms" or "email".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "sms" => Some(MessageType::Sms),
            "email" => Some(MessageType::Email),
            _ => None,
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageType::Sms => write!(f, "sms"),
            MessageType::Email => write!(f, "email"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Message {
    pub id: i64,
    pub from_user_id: i64,
    pub to_user_id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_display() {
        assert_eq!(MessageType::Sms.to_string(), "sms");
        assert_eq!(MessageType::Email.to_string(), "email");
    }

    #[test]
    fn test_message_type_parse() {
        assert_eq!(MessageType::parse("sms"), Some(MessageType::Sms));
        assert_eq!(MessageType::parse("email"), Some(MessageType::Email));
        assert_eq!(MessageType::parse("fax"), None);
        assert_eq!(MessageType::parse("SMS"), None);
    }

    #[test]
    fn test_message_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(MessageType::Sms).unwrap(),
            serde_json::json!("sms")
        );
    }
}
