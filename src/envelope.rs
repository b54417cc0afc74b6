use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Uniform response wrapper. Every endpoint, success or failure, answers
/// with `{status, data, message}`; error responses are produced in the same
/// shape by [`crate::error::AppError`].
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            data,
            message: message.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_has_status_data_and_message() {
        let response = ApiResponse::new(StatusCode::CREATED, json!([]), "Message sent successfully");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], 201);
        assert_eq!(value["data"], json!([]));
        assert_eq!(value["message"], "Message sent successfully");
    }

    #[test]
    fn envelope_carries_structured_data() {
        let response = ApiResponse::new(StatusCode::OK, json!({"logs": []}), "Data fetched successfully");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], 200);
        assert_eq!(value["data"]["logs"], json!([]));
    }
}
