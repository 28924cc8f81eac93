use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    MethodNotAllowed,
    InvalidJsonBody(String),
    InternalServerError(String),
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::MethodNotAllowed => ApiError {
                code: StatusCode::METHOD_NOT_ALLOWED,
                error: "Method not allowed".to_string(),
                message: None,
            },
            Self::InvalidJsonBody(message) => ApiError {
                code: StatusCode::BAD_REQUEST,
                error: "Invalid JSON body".to_string(),
                message: Some(message.to_string()),
            },
            Self::InternalServerError(message) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                error: "Internal server error".to_string(),
                message: Some(message.to_string()),
            },
        }
    }
}
