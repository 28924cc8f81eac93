use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDto {
    pub action: Option<String>,
    pub api_key: Option<String>,
    pub model_version: Option<String>,
    pub image: Option<String>,
    pub prompt: Option<String>,
    pub prediction_id: Option<String>,
}

impl GenerateDto {
    pub fn action(&self) -> Option<&str> {
        non_empty(&self.action)
    }

    pub fn api_key(&self) -> Option<&str> {
        non_empty(&self.api_key)
    }

    pub fn model_version(&self) -> Option<&str> {
        non_empty(&self.model_version)
    }

    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    pub fn prompt(&self) -> Option<&str> {
        non_empty(&self.prompt)
    }

    pub fn prediction_id(&self) -> Option<&str> {
        non_empty(&self.prediction_id)
    }
}

// An empty string is as good as absent.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
