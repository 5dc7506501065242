//! Server probe responses (`/health`, `/model_info`).

use serde::{Deserialize, Serialize};

/// `/health` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// Whether the classification model finished loading
    #[serde(default)]
    pub model_loaded: bool,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy" || self.status == "ok"
    }
}

/// `/model_info` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub model_info: Option<ModelInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Shape and label set of the classification model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Keras input shape; the batch dimension is `null`
    #[serde(default)]
    pub input_shape: Vec<Option<u64>>,
    #[serde(default)]
    pub output_shape: Vec<Option<u64>>,
    pub num_classes: u32,
    pub class_names: Vec<String>,
    /// Width and height the server resizes inputs to
    #[serde(default)]
    pub image_size: Vec<u32>,
}
