use async_trait::async_trait;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Url,
};
use serde_json::Value;

use crate::app::models::api_error::ApiError;

use super::{
    errors::ReplicateApiError, models::input_spec::InputSpec,
    structs::replicate_response::ReplicateResponse, PredictionsApi,
};

#[derive(Debug, Clone)]
pub struct ReplicateClient {
    client: reqwest::Client,
    api_url: Url,
}

impl ReplicateClient {
    pub fn new(api_url: &str) -> Result<Self, ApiError> {
        let api_url = match Url::parse(api_url) {
            Ok(url) => url,
            Err(e) => return Err(ReplicateApiError::InvalidApiUrl(e.to_string()).value()),
        };

        if api_url.cannot_be_a_base() {
            return Err(ReplicateApiError::InvalidApiUrl(format!(
                "{} cannot be used as a base url",
                api_url
            ))
            .value());
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_url,
        })
    }

    /// `{api_url}/predictions`, or `{api_url}/predictions/{id}` with the id
    /// encoded as a single path segment.
    pub fn predictions_url(&self, id: Option<&str>) -> Url {
        let mut url = self.api_url.clone();

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("predictions");
            if let Some(id) = id {
                segments.push(id);
            }
        }

        url
    }
}

#[async_trait]
impl PredictionsApi for ReplicateClient {
    async fn create_prediction(
        &self,
        api_key: &str,
        input_spec: &InputSpec,
    ) -> Result<ReplicateResponse, ApiError> {
        let headers = provide_headers(api_key)?;
        let url = self.predictions_url(None);

        tracing::debug!("create_prediction: POST {}", url);

        let result = self
            .client
            .post(url)
            .headers(headers)
            .json(input_spec)
            .send()
            .await;

        relay(result, "create_prediction").await
    }

    async fn get_prediction(&self, api_key: &str, id: &str) -> Result<ReplicateResponse, ApiError> {
        let headers = provide_headers(api_key)?;
        let url = self.predictions_url(Some(id));

        tracing::debug!("get_prediction: GET {}", url);

        let result = self.client.get(url).headers(headers).send().await;

        relay(result, "get_prediction").await
    }
}

pub fn provide_headers(api_key: &str) -> Result<HeaderMap, ApiError> {
    let Ok(authorization) = HeaderValue::from_str(&format!("Token {}", api_key))
    else {
        return Err(ReplicateApiError::InvalidApiKey.value());
    };

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::AUTHORIZATION, authorization);

    Ok(headers)
}

async fn relay(
    result: Result<reqwest::Response, reqwest::Error>,
    operation: &str,
) -> Result<ReplicateResponse, ApiError> {
    let res = match result {
        Ok(res) => res,
        Err(e) => {
            tracing::warn!("{} (1): {:?}", operation, e);
            return Err(ReplicateApiError::RequestFailed(e.to_string()).value());
        }
    };

    let code = res.status();

    let text = match res.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("{} (2): {:?}", operation, e);
            return Err(ReplicateApiError::RequestFailed(e.to_string()).value());
        }
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(body) => {
            if !code.is_success() {
                tracing::warn!("{} relaying upstream {}", operation, code);
            }

            Ok(ReplicateResponse { code, body })
        }
        Err(e) => {
            tracing::warn!("{} (3): {} {:?}", operation, code, text);
            Err(ReplicateApiError::InvalidResponse(e.to_string()).value())
        }
    }
}
