use crate::error::Result;
use crate::message::message_models::{Message, MessageType};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

/// Predicate selecting the rows of one conversation view. The grouping of
/// the AND/OR branches is part of the contract: the pair form must match the
/// two users in either direction and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationFilter {
    /// Every message sent or received by one user.
    Party { user_id: i64 },
    /// The two-party thread between `user_id` and `other_id`, direction-agnostic.
    Pair { user_id: i64, other_id: i64 },
}

impl ConversationFilter {
    pub fn new(primary: i64, secondary: Option<i64>) -> Self {
        match secondary {
            Some(other_id) => ConversationFilter::Pair {
                user_id: primary,
                other_id,
            },
            None => ConversationFilter::Party { user_id: primary },
        }
    }

    fn predicate(&self) -> &'static str {
        match self {
            ConversationFilter::Party { .. } => "(m.from_user_id = $1 OR m.to_user_id = $1)",
            ConversationFilter::Pair { .. } => {
                "((m.from_user_id = $1 AND m.to_user_id = $2) OR (m.from_user_id = $2 AND m.to_user_id = $1))"
            }
        }
    }

    fn bind_count(&self) -> usize {
        match self {
            ConversationFilter::Party { .. } => 1,
            ConversationFilter::Pair { .. } => 2,
        }
    }
}

/// One conversation row joined with both party names. A name is `None` when
/// the referenced user no longer exists.
#[derive(Debug, Clone, FromRow)]
pub struct MessageLogRow {
    pub id: i64,
    pub from_user: Option<String>,
    pub to_user: Option<String>,
    #[sqlx(rename = "type")]
    pub message_type: MessageType,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        from_user_id: i64,
        to_user_id: i64,
        message_type: MessageType,
        message: &str,
    ) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (from_user_id, to_user_id, type, message)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(from_user_id)
        .bind(to_user_id)
        .bind(message_type)
        .bind(message)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    pub async fn count_conversation(&self, filter: &ConversationFilter) -> Result<i64> {
        let query = format!("SELECT COUNT(*) FROM messages m WHERE {}", filter.predicate());

        let q = sqlx::query_scalar::<_, i64>(&query);
        let q = match *filter {
            ConversationFilter::Party { user_id } => q.bind(user_id),
            ConversationFilter::Pair { user_id, other_id } => q.bind(user_id).bind(other_id),
        };

        let count = q.fetch_one(&self.pool).await?;
        Ok(count)
    }

    /// Fetches one page of the conversation with both party names joined in.
    /// Rows are ordered by id (insertion order) so page concatenation is
    /// stable and free of duplicates.
    pub async fn find_conversation_page(
        &self,
        filter: &ConversationFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MessageLogRow>> {
        let bind_count = filter.bind_count();
        let query = format!(
            "SELECT m.id, fu.name AS from_user, tu.name AS to_user, m.type, m.message, m.created_at
             FROM messages m
             LEFT JOIN users fu ON fu.id = m.from_user_id
             LEFT JOIN users tu ON tu.id = m.to_user_id
             WHERE {}
             ORDER BY m.id ASC
             LIMIT ${} OFFSET ${}",
            filter.predicate(),
            bind_count + 1,
            bind_count + 2,
        );

        let q = sqlx::query_as::<_, MessageLogRow>(&query);
        let q = match *filter {
            ConversationFilter::Party { user_id } => q.bind(user_id),
            ConversationFilter::Pair { user_id, other_id } => q.bind(user_id).bind(other_id),
        };

        let rows = q.bind(limit).bind(offset).fetch_all(&self.pool).await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn party_predicate_matches_either_side() {
        let filter = ConversationFilter::new(7, None);
        assert_eq!(filter, ConversationFilter::Party { user_id: 7 });
        assert_eq!(filter.predicate(), "(m.from_user_id = $1 OR m.to_user_id = $1)");
        assert_eq!(filter.bind_count(), 1);
    }

    #[test]
    fn pair_predicate_keeps_and_or_grouping() {
        let filter = ConversationFilter::new(1, Some(2));
        assert_eq!(
            filter,
            ConversationFilter::Pair {
                user_id: 1,
                other_id: 2
            }
        );
        // Each direction is its own AND group; a flat OR chain over the four
        // comparisons would select unrelated messages.
        assert_eq!(
            filter.predicate(),
            "((m.from_user_id = $1 AND m.to_user_id = $2) OR (m.from_user_id = $2 AND m.to_user_id = $1))"
        );
        assert_eq!(filter.bind_count(), 2);
    }

    #[test]
    fn pair_predicate_is_symmetric_in_argument_order() {
        // Swapping the arguments swaps only the bind values; the predicate
        // covers both directions, so (A,B) and (B,A) select the same rows.
        assert_eq!(
            ConversationFilter::new(1, Some(2)).predicate(),
            ConversationFilter::new(2, Some(1)).predicate()
        );
    }
}
