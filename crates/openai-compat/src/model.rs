use serde::{Deserialize, Serialize};

/// Model information in OpenAI list format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub object: String,
    pub created: u64,
    pub owned_by: String,
}

/// Response from the models list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub object: String,
    pub data: Vec<ModelInfo>,
}

/// OpenAI-visible model identifier for a Bailian application
pub fn bailian_model_id(app_id: &str) -> String {
    format!("bailian-app-{app_id}")
}

impl ModelInfo {
    /// Model entry advertising the given Bailian application
    pub fn for_app(app_id: &str, created: u64) -> Self {
        Self {
            id: bailian_model_id(app_id),
            object: "model".to_string(),
            created,
            owned_by: "bailian".to_string(),
        }
    }
}

impl ModelsResponse {
    /// Model list advertising the given Bailian applications
    pub fn for_apps<'a>(app_ids: impl IntoIterator<Item = &'a str>, created: u64) -> Self {
        Self {
            object: "list".to_string(),
            data: app_ids
                .into_iter()
                .map(|id| ModelInfo::for_app(id, created))
                .collect(),
        }
    }
}
