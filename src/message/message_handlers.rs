use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::{
    envelope::ApiResponse,
    error::{AppError, FieldErrors, Result},
    message::message_dto::{ConversationLogsQuery, SendMessageRequest, DEFAULT_PER_PAGE},
    message::message_models::MessageType,
    state::AppState,
    user::user_models::{Identifier, User},
};

/// Send a message from one user to another
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message sent successfully"),
        (status = 422, description = "Invalid input or unknown sender/recipient"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<impl IntoResponse> {
    let mut errors = FieldErrors::new();
    if let Err(validation) = payload.validate() {
        errors.merge(validation);
    }

    let message_type = MessageType::parse(&payload.message_type);
    if message_type.is_none() {
        errors.push("type", "type must be either sms or email");
    }

    // Unknown sender/recipient is a validation failure, not a 404; nothing
    // is written unless every check passes.
    if !state.user_repository.exists(payload.from_user_id).await? {
        errors.push("from_user_id", "from_user_id does not reference an existing user");
    }
    if !state.user_repository.exists(payload.to_user_id).await? {
        errors.push("to_user_id", "to_user_id does not reference an existing user");
    }

    let message_type = match message_type {
        Some(message_type) if errors.is_empty() => message_type,
        _ => return Err(AppError::FieldValidation(errors)),
    };

    state
        .message_service
        .send_message(
            payload.from_user_id,
            payload.to_user_id,
            message_type,
            &payload.message,
        )
        .await?;

    tracing::debug!(
        from_user_id = payload.from_user_id,
        to_user_id = payload.to_user_id,
        "message recorded"
    );

    Ok(ApiResponse::new(
        StatusCode::CREATED,
        json!([]),
        "Message sent successfully",
    ))
}

/// Paginated conversation history for one user or between two users
#[utoipa::path(
    get,
    path = "/api/messages/logs",
    tag = "messages",
    responses(
        (status = 200, description = "Data fetched successfully"),
        (status = 404, description = "User not found for user1 or user2"),
        (status = 422, description = "Missing user1 or invalid page parameters")
    )
)]
pub async fn get_conversation_logs(
    State(state): State<AppState>,
    Query(query): Query<ConversationLogsQuery>,
) -> Result<impl IntoResponse> {
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE);
    let page = query.page.unwrap_or(1);

    let mut errors = FieldErrors::new();
    if per_page < 1 {
        errors.push("per_page", "per_page must be at least 1");
    }
    if page < 1 {
        errors.push("page", "page must be at least 1");
    }
    if !errors.is_empty() {
        return Err(AppError::FieldValidation(errors));
    }

    // Empty or whitespace-only parameters are treated as absent.
    let user1 = query
        .user1
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty());
    let user2 = query
        .user2
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty());

    let Some(user1) = user1 else {
        return Err(AppError::Validation(
            "At least user1 parameter is required".to_string(),
        ));
    };

    let primary = resolve_party(&state, user1, "user1").await?;
    let secondary = match user2 {
        Some(raw) => Some(resolve_party(&state, raw, "user2").await?),
        None => None,
    };

    let logs = state
        .message_service
        .conversation_logs(primary.id, secondary.map(|user| user.id), per_page, page)
        .await?;

    Ok(ApiResponse::new(
        StatusCode::OK,
        logs,
        "Data fetched successfully",
    ))
}

/// Resolves one user parameter. Unparseable and unknown identifiers both map
/// to the per-parameter not-found outcome.
async fn resolve_party(state: &AppState, raw: &str, param: &str) -> Result<User> {
    let user = match Identifier::parse(raw) {
        Some(identifier) => state.user_repository.resolve(&identifier).await?,
        None => None,
    };

    user.ok_or_else(|| AppError::NotFound(format!("User not found for {}", param)))
}
