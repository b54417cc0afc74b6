use crate::{
    message::{
        self,
        message_dto::{ConversationLogs, MessageLog, Pagination, SendMessageRequest},
        message_models::MessageType,
    },
    state::AppState,
    user::{
        self,
        user_dto::{CreateUserRequest, UserResponse},
    },
};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        user::user_handlers::create_user,
        user::user_handlers::get_user,
        message::message_handlers::send_message,
        message::message_handlers::get_conversation_logs,
    ),
    components(
        schemas(
            CreateUserRequest,
            UserResponse,
            SendMessageRequest,
            MessageType,
            MessageLog,
            Pagination,
            ConversationLogs,
        )
    ),
    tags(
        (name = "users", description = "User provisioning endpoints"),
        (name = "messages", description = "Message log endpoints")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let user_routes = Router::new()
        .route("/", post(user::user_handlers::create_user))
        .route("/:id", get(user::user_handlers::get_user));

    let message_routes = Router::new()
        .route("/", post(message::message_handlers::send_message))
        .route("/logs", get(message::message_handlers::get_conversation_logs));

    let api_routes = Router::new()
        .nest("/users", user_routes)
        .nest("/messages", message_routes);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
