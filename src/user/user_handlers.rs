use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    envelope::ApiResponse,
    error::Result,
    state::AppState,
    user::user_dto::{CreateUserRequest, UserResponse},
};

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully"),
        (status = 422, description = "Invalid input or email already taken")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let user = state.user_service.create_user(payload).await?;

    Ok(ApiResponse::new(
        StatusCode::CREATED,
        UserResponse::from(user),
        "User created successfully",
    ))
}

/// Fetch a user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    responses(
        (status = 200, description = "User fetched successfully"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.get_user(id).await?;

    Ok(ApiResponse::new(
        StatusCode::OK,
        UserResponse::from(user),
        "Data fetched successfully",
    ))
}
