use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum GenerateApiError {
    ApiKeyRequired,
    MissingRequiredFields,
    PredictionIdRequired,
    InvalidAction,
}

impl GenerateApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::ApiKeyRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                error: "API key is required".to_string(),
                message: None,
            },
            Self::MissingRequiredFields => ApiError {
                code: StatusCode::BAD_REQUEST,
                error: "Missing required fields".to_string(),
                message: None,
            },
            Self::PredictionIdRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                error: "Prediction ID is required".to_string(),
                message: None,
            },
            Self::InvalidAction => ApiError {
                code: StatusCode::BAD_REQUEST,
                error: "Invalid action".to_string(),
                message: None,
            },
        }
    }
}
