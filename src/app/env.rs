use serde::Deserialize;

use crate::{generate::presets::DEFAULT_PRESET, replicate::config::API_URL};

pub static DEFAULT_PORT: u16 = 3000;
pub static DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub replicate_api_url: Option<String>,
    pub sketch_preset: Option<String>,

    pub max_body_bytes: Option<usize>,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn replicate_api_url(&self) -> &str {
        self.replicate_api_url.as_deref().unwrap_or(API_URL)
    }

    pub fn sketch_preset(&self) -> &str {
        self.sketch_preset.as_deref().unwrap_or(DEFAULT_PRESET)
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes.unwrap_or(DEFAULT_MAX_BODY_BYTES)
    }
}
