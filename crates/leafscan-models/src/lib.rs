//! Shared data models for the LeafScan client.
//!
//! This crate provides Serde-serializable types for:
//! - The three inference routes and their request body
//! - Raw server responses for classification, detection and segmentation
//! - Decoded, display-ready results
//! - Health and model-info probes

pub mod classification;
pub mod detection;
pub mod endpoint;
mod lenient;
pub mod request;
pub mod result;
pub mod segmentation;
pub mod server;

// Re-export common types
pub use classification::{ClassificationResponse, ClassificationResult};
pub use detection::{DetectedObject, DetectionResponse, DetectionResult};
pub use endpoint::{Endpoint, EndpointParseError, PayloadForm};
pub use request::InferenceRequest;
pub use result::InferenceResult;
pub use segmentation::{DetectionEntry, SegmentationResponse, SegmentationResult};
pub use server::{HealthStatus, ModelInfo, ModelInfoResponse};
