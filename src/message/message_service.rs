use crate::error::Result;
use crate::message::message_dto::{ConversationLogs, MessageLog, Pagination};
use crate::message::message_models::{Message, MessageType};
use crate::message::message_repository::{ConversationFilter, MessageRepository};

#[derive(Clone)]
pub struct MessageService {
    repo: MessageRepository,
}

impl MessageService {
    pub fn new(repo: MessageRepository) -> Self {
        Self { repo }
    }

    pub async fn send_message(
        &self,
        from_user_id: i64,
        to_user_id: i64,
        message_type: MessageType,
        message: &str,
    ) -> Result<Message> {
        self.repo
            .create(from_user_id, to_user_id, message_type, message)
            .await
    }

    /// One conversation read: count the filtered set, compute the navigation
    /// metadata, fetch the requested page, shape the rows. A page number past
    /// the end yields an empty `logs` list with correct metadata.
    pub async fn conversation_logs(
        &self,
        primary_id: i64,
        secondary_id: Option<i64>,
        per_page: i64,
        page: i64,
    ) -> Result<ConversationLogs> {
        let filter = ConversationFilter::new(primary_id, secondary_id);

        let total_items = self.repo.count_conversation(&filter).await?;
        let pagination = Pagination::compute(total_items, per_page, page);

        let offset = (page - 1) * per_page;
        let rows = self
            .repo
            .find_conversation_page(&filter, per_page, offset)
            .await?;
        let logs = rows.into_iter().map(MessageLog::from).collect();

        Ok(ConversationLogs { logs, pagination })
    }
}
