use axum::{
    body::Body,
    extract::{FromRequest, State},
    http::{Method, Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_macros::debug_handler;
use bytes::Bytes;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    AppState,
};

use super::{
    dtos::generate_dto::GenerateDto, enums::generate_action::GenerateAction,
    errors::GenerateApiError, service,
};

/// Single entry point for both actions. The body is only buffered once the
/// method is known to be POST.
#[debug_handler]
pub async fn generate(
    method: Method,
    State(state): State<AppState>,
    request: Request<Body>,
) -> Result<Response, ApiError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    if method != Method::POST {
        return Err(DefaultApiError::MethodNotAllowed.value());
    }

    let body = match Bytes::from_request(request, &state).await {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!("generate failed to read body: {}", rejection);
            return Ok(rejection.into_response());
        }
    };

    let dto = parse_dto(&body)?;

    let Some(api_key) = dto.api_key()
    else {
        return Err(GenerateApiError::ApiKeyRequired.value());
    };

    tracing::debug!("generate: action {:?}", dto.action());

    let response = match dto.action() {
        Some(GenerateAction::CREATE) => service::create_prediction(&dto, api_key, &state).await?,
        Some(GenerateAction::STATUS) => service::get_prediction(&dto, api_key, &state).await?,
        _ => return Err(GenerateApiError::InvalidAction.value()),
    };

    Ok((response.code, Json(response.body)).into_response())
}

fn parse_dto(body: &Bytes) -> Result<GenerateDto, ApiError> {
    if body.is_empty() {
        return Ok(GenerateDto::default());
    }

    match serde_json::from_slice(body) {
        Ok(dto) => Ok(dto),
        Err(e) => {
            tracing::warn!("generate received an unreadable body: {}", e);
            Err(DefaultApiError::InvalidJsonBody(e.to_string()).value())
        }
    }
}
