//! Endpoint-independent view of a decoded inference.

use image::DynamicImage;

use crate::classification::ClassificationResult;
use crate::detection::DetectionResult;
use crate::endpoint::Endpoint;
use crate::segmentation::SegmentationResult;

/// Successful outcome of one submission, tagged by endpoint.
#[derive(Debug, Clone)]
pub enum InferenceResult {
    Classification(ClassificationResult),
    Detection(DetectionResult),
    Segmentation(SegmentationResult),
}

impl InferenceResult {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            InferenceResult::Classification(_) => Endpoint::Classification,
            InferenceResult::Detection(_) => Endpoint::Detection,
            InferenceResult::Segmentation(_) => Endpoint::Segmentation,
        }
    }

    /// Server-rendered image to display, if the endpoint produces one.
    pub fn annotated_image(&self) -> Option<&DynamicImage> {
        match self {
            InferenceResult::Classification(_) => None,
            InferenceResult::Detection(d) => Some(&d.annotated_image),
            InferenceResult::Segmentation(s) => Some(&s.annotated_image),
        }
    }

    /// Text for the result card.
    pub fn display_text(&self) -> String {
        match self {
            InferenceResult::Classification(c) => c.summary(),
            InferenceResult::Detection(d) => d.report(),
            InferenceResult::Segmentation(s) => s.report(),
        }
    }

    pub fn as_classification(&self) -> Option<&ClassificationResult> {
        match self {
            InferenceResult::Classification(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_detection(&self) -> Option<&DetectionResult> {
        match self {
            InferenceResult::Detection(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_segmentation(&self) -> Option<&SegmentationResult> {
        match self {
            InferenceResult::Segmentation(s) => Some(s),
            _ => None,
        }
    }
}

impl From<ClassificationResult> for InferenceResult {
    fn from(value: ClassificationResult) -> Self {
        InferenceResult::Classification(value)
    }
}

impl From<DetectionResult> for InferenceResult {
    fn from(value: DetectionResult) -> Self {
        InferenceResult::Detection(value)
    }
}

impl From<SegmentationResult> for InferenceResult {
    fn from(value: SegmentationResult) -> Self {
        InferenceResult::Segmentation(value)
    }
}
