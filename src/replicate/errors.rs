use reqwest::StatusCode;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

#[derive(Debug)]
pub enum ReplicateApiError {
    InvalidApiUrl(String),
    InvalidApiKey,
    RequestFailed(String),
    InvalidResponse(String),
}

impl ReplicateApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::InvalidApiUrl(message) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                error: "Invalid Replicate API url".to_string(),
                message: Some(message.to_string()),
            },
            Self::InvalidApiKey => ApiError {
                code: StatusCode::BAD_REQUEST,
                error: "Invalid API key".to_string(),
                message: None,
            },
            Self::RequestFailed(message) | Self::InvalidResponse(message) => {
                DefaultApiError::InternalServerError(message.to_string()).value()
            }
        }
    }
}
