//! Request body shared by every inference route.

use serde::{Deserialize, Serialize};

/// JSON body `{"image": "<payload>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Encoded image, raw base64 or a data URL depending on the route
    pub image: String,
}

impl InferenceRequest {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
        }
    }
}
