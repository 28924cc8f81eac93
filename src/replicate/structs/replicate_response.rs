use reqwest::StatusCode;
use serde_json::Value;

/// An upstream reply, relayed to the caller without interpretation.
#[derive(Debug, Clone)]
pub struct ReplicateResponse {
    pub code: StatusCode,
    pub body: Value,
}
