use crate::message::message_models::MessageType;
use crate::message::message_repository::MessageLogRow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const DEFAULT_PER_PAGE: i64 = 5;

/// Display name substituted when a log row references a user that has been
/// removed from the store.
pub const DELETED_USER_PLACEHOLDER: &str = "[deleted user]";

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    pub from_user_id: i64,
    pub to_user_id: i64,
    #[serde(rename = "type")]
    pub message_type: String,
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ConversationLogsQuery {
    pub user1: Option<String>,
    pub user2: Option<String>,
    pub per_page: Option<i64>,
    pub page: Option<i64>,
}

/// Shaped log entry: party names instead of ids, timestamp rendered as
/// "YYYY-MM-DD HH:MM:SS".
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageLog {
    pub id: i64,
    pub from_user: String,
    pub to_user: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub message: String,
    pub created_at: String,
}

impl From<MessageLogRow> for MessageLog {
    fn from(row: MessageLogRow) -> Self {
        Self {
            id: row.id,
            from_user: row
                .from_user
                .unwrap_or_else(|| DELETED_USER_PLACEHOLDER.to_string()),
            to_user: row
                .to_user
                .unwrap_or_else(|| DELETED_USER_PLACEHOLDER.to_string()),
            message_type: row.message_type,
            message: row.message,
            created_at: row.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pagination {
    pub current_page: i64,
    pub previous_page: Option<i64>,
    pub next_page: Option<i64>,
    pub total_pages: i64,
    pub total_items: i64,
    pub items_per_page: i64,
}

impl Pagination {
    /// Navigation metadata for one page. `total_pages` never drops below 1:
    /// an empty result set is a single empty page.
    pub fn compute(total_items: i64, items_per_page: i64, current_page: i64) -> Self {
        let total_pages = ((total_items as f64) / (items_per_page as f64)).ceil() as i64;
        let total_pages = total_pages.max(1);

        let previous_page = if current_page > 1 {
            Some(current_page - 1)
        } else {
            None
        };
        let next_page = if current_page < total_pages {
            Some(current_page + 1)
        } else {
            None
        };

        Self {
            current_page,
            previous_page,
            next_page,
            total_pages,
            total_items,
            items_per_page,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConversationLogs {
    pub logs: Vec<MessageLog>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn pagination_rounds_total_pages_up() {
        let p = Pagination::compute(11, 5, 1);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.total_items, 11);
        assert_eq!(p.items_per_page, 5);
    }

    #[test]
    fn pagination_first_page_has_no_previous() {
        let p = Pagination::compute(12, 5, 1);
        assert_eq!(p.previous_page, None);
        assert_eq!(p.next_page, Some(2));
    }

    #[test]
    fn pagination_last_page_has_no_next() {
        let p = Pagination::compute(12, 5, 3);
        assert_eq!(p.previous_page, Some(2));
        assert_eq!(p.next_page, None);
    }

    #[test]
    fn pagination_interior_page_has_both_neighbours() {
        let p = Pagination::compute(12, 5, 2);
        assert_eq!(p.previous_page, Some(1));
        assert_eq!(p.next_page, Some(3));
    }

    #[test]
    fn pagination_empty_set_is_one_empty_page() {
        let p = Pagination::compute(0, 5, 1);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.total_items, 0);
        assert_eq!(p.previous_page, None);
        assert_eq!(p.next_page, None);
    }

    #[test]
    fn pagination_out_of_range_page_keeps_formula_metadata() {
        let p = Pagination::compute(10, 5, 7);
        assert_eq!(p.total_pages, 2);
        assert_eq!(p.previous_page, Some(6));
        assert_eq!(p.next_page, None);
    }

    #[test]
    fn pagination_single_message_example() {
        // Alice and Bob exchange two messages; one page holds both.
        let p = Pagination::compute(2, 5, 1);
        assert_eq!(p.total_items, 2);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.previous_page, None);
        assert_eq!(p.next_page, None);
    }

    fn sample_row(from_user: Option<&str>, to_user: Option<&str>) -> MessageLogRow {
        MessageLogRow {
            id: 1,
            from_user: from_user.map(str::to_string),
            to_user: to_user.map(str::to_string),
            message_type: MessageType::Sms,
            message: "hi".to_string(),
            created_at: chrono::Utc.with_ymd_and_hms(2024, 6, 3, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn shaping_uses_party_names_and_formatted_timestamp() {
        let log = MessageLog::from(sample_row(Some("Alice"), Some("Bob")));
        assert_eq!(log.from_user, "Alice");
        assert_eq!(log.to_user, "Bob");
        assert_eq!(log.created_at, "2024-06-03 10:30:00");
    }

    #[test]
    fn shaping_substitutes_placeholder_for_removed_users() {
        let log = MessageLog::from(sample_row(None, Some("Bob")));
        assert_eq!(log.from_user, DELETED_USER_PLACEHOLDER);
        assert_eq!(log.to_user, "Bob");
    }

    #[test]
    fn shaped_log_serializes_with_wire_field_names() {
        let log = MessageLog::from(sample_row(Some("Alice"), Some("Bob")));
        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["type"], "sms");
        assert_eq!(value["from_user"], "Alice");
        assert_eq!(value["to_user"], "Bob");
        assert_eq!(value["created_at"], "2024-06-03 10:30:00");
    }
}
