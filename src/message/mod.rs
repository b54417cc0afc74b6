pub mod message_dto;
pub mod message_handlers;
pub mod message_models;
pub mod message_repository;
pub mod message_service;

pub use message_models::{Message, MessageType};
pub use message_repository::{ConversationFilter, MessageRepository};
pub use message_service::MessageService;
