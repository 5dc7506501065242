//! Inference client error types.

use thiserror::Error;

pub type ClientResult<T> = Result<T, InferenceError>;

/// Every way a submission can fail. All of them are returned to the caller
/// through the same channel as a successful result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Server error: {0}")]
    ServerError(u16),

    #[error("Empty response")]
    EmptyResponse,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    ApplicationFailure(String),

    #[error("Image encoding failed: {0}")]
    EncodingFailure(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl InferenceError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::NetworkFailure(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn application(msg: impl Into<String>) -> Self {
        Self::ApplicationFailure(msg.into())
    }

    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::EncodingFailure(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Message shown to the user in place of a result.
    pub fn user_message(&self) -> String {
        match self {
            InferenceError::NetworkFailure(msg) => format!("Request failed: {}", msg),
            InferenceError::ServerError(status) => format!("Server error: {}", status),
            InferenceError::EmptyResponse => "Empty response".to_string(),
            InferenceError::MalformedResponse(msg) => format!("Parsing error: {}", msg),
            InferenceError::ApplicationFailure(msg) => msg.clone(),
            InferenceError::EncodingFailure(msg) => format!("Could not encode image: {}", msg),
            InferenceError::InvalidConfig(msg) => format!("Configuration error: {}", msg),
        }
    }

    /// Short label used for the `outcome` metric dimension.
    pub fn kind(&self) -> &'static str {
        match self {
            InferenceError::NetworkFailure(_) => "network_failure",
            InferenceError::ServerError(_) => "server_error",
            InferenceError::EmptyResponse => "empty_response",
            InferenceError::MalformedResponse(_) => "malformed_response",
            InferenceError::ApplicationFailure(_) => "application_failure",
            InferenceError::EncodingFailure(_) => "encoding_failure",
            InferenceError::InvalidConfig(_) => "invalid_config",
        }
    }
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::NetworkFailure(format!("timed out: {}", err))
        } else {
            Self::NetworkFailure(err.to_string())
        }
    }
}

impl From<serde_json::Error> for InferenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

impl From<image::ImageError> for InferenceError {
    fn from(err: image::ImageError) -> Self {
        Self::MalformedResponse(format!("image decode failed: {}", err))
    }
}
