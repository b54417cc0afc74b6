use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;

/// Field-level validation messages, keyed by input field name. Serialized as
/// the `message` object of a 422 response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn merge(&mut self, errors: validator::ValidationErrors) {
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                self.push(field, message);
            }
        }
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        fields.merge(errors);
        fields
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation failed")]
    FieldValidation(FieldErrors),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::FieldValidation(errors.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!("Something went wrong, please try again later"),
                )
            }
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, json!(msg)),
            AppError::FieldValidation(fields) => (StatusCode::UNPROCESSABLE_ENTITY, json!(fields)),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!(msg)),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "data": [],
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_group_messages_by_field() {
        let mut errors = FieldErrors::new();
        errors.push("type", "type must be either sms or email");
        errors.push("message", "message must not be empty");
        errors.push("message", "message is invalid");

        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value["type"], json!(["type must be either sms or email"]));
        assert_eq!(
            value["message"],
            json!(["message must not be empty", "message is invalid"])
        );
    }

    #[test]
    fn empty_field_errors_report_empty() {
        assert!(FieldErrors::new().is_empty());

        let mut errors = FieldErrors::new();
        errors.push("email", "email has already been taken");
        assert!(!errors.is_empty());
    }
}
