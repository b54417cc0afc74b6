use crate::error::{AppError, FieldErrors, Result};
use crate::user::user_dto::CreateUserRequest;
use crate::user::user_models::User;
use crate::user::user_repository::UserRepository;

#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    pub async fn create_user(&self, payload: CreateUserRequest) -> Result<User> {
        if self.repo.find_by_email(&payload.email).await?.is_some() {
            let mut errors = FieldErrors::new();
            errors.push("email", "email has already been taken");
            return Err(AppError::FieldValidation(errors));
        }

        self.repo.create(&payload.name, &payload.email).await
    }

    pub async fn get_user(&self, id: i64) -> Result<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
