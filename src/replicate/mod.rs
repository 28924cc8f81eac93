use async_trait::async_trait;

use crate::app::models::api_error::ApiError;

use self::{models::input_spec::InputSpec, structs::replicate_response::ReplicateResponse};

pub mod config;
pub mod errors;
pub mod models;
pub mod service;
pub mod structs;

/// The upstream prediction endpoints the proxy relays to.
///
/// Implementations return the upstream status and JSON body as-is, success
/// or not. `Err` is reserved for failures where no usable upstream
/// response exists.
#[async_trait]
pub trait PredictionsApi: Send + Sync {
    async fn create_prediction(
        &self,
        api_key: &str,
        input_spec: &InputSpec,
    ) -> Result<ReplicateResponse, ApiError>;

    async fn get_prediction(&self, api_key: &str, id: &str) -> Result<ReplicateResponse, ApiError>;
}
