//! Response decoding, one strategy per endpoint.
//!
//! Called only with a non-empty 2xx body. Every failure comes back as an
//! [`InferenceError`]; nothing here panics on server input.

use leafscan_models::{
    ClassificationResponse, ClassificationResult, DetectionResponse, DetectionResult, Endpoint,
    InferenceResult, SegmentationResponse, SegmentationResult,
};
use tracing::{debug, warn};

use crate::encoder::{decode_payload, decode_raster};
use crate::error::{ClientResult, InferenceError};

pub const CLASSIFICATION_FAILED: &str = "Prediction failed or empty";
pub const DETECTION_IMAGE_MISSING: &str = "No annotated image found in response";
pub const SEGMENTATION_FAILED: &str = "Segmentation failed or missing annotated image";

/// Decode a response body for the given endpoint.
pub fn decode_response(endpoint: Endpoint, body: &[u8]) -> ClientResult<InferenceResult> {
    match endpoint {
        Endpoint::Classification => decode_classification(body).map(Into::into),
        Endpoint::Detection => decode_detection(body).map(Into::into),
        Endpoint::Segmentation => decode_segmentation(body).map(Into::into),
    }
}

pub fn decode_classification(body: &[u8]) -> ClientResult<ClassificationResult> {
    let response: ClassificationResponse = serde_json::from_slice(body)?;

    match response.prediction {
        Some(prediction) if response.success => {
            debug!(
                predicted_class = %prediction.predicted_class,
                confidence = prediction.confidence,
                "Classification decoded"
            );
            Ok(prediction)
        }
        _ => {
            if let Some(reason) = response.error.as_deref() {
                warn!("Classification rejected by server: {}", reason);
            }
            Err(InferenceError::application(CLASSIFICATION_FAILED))
        }
    }
}

pub fn decode_detection(body: &[u8]) -> ClientResult<DetectionResult> {
    let response: DetectionResponse = serde_json::from_slice(body)?;

    let Some(encoded) = response.annotated_image_str() else {
        if let Some(reason) = response.error.as_deref() {
            warn!("Detection rejected by server: {}", reason);
        }
        return Err(InferenceError::application(DETECTION_IMAGE_MISSING));
    };

    let annotated_image = decode_raster(&decode_payload(encoded)?)?;
    debug!(
        width = annotated_image.width(),
        height = annotated_image.height(),
        objects = response.detections.len(),
        "Detection decoded"
    );

    Ok(DetectionResult {
        annotated_image,
        detections: response.detections,
    })
}

pub fn decode_segmentation(body: &[u8]) -> ClientResult<SegmentationResult> {
    let response: SegmentationResponse = serde_json::from_slice(body)?;

    let encoded = match response.annotated_image_str() {
        Some(encoded) if response.success => encoded,
        _ => {
            if let Some(reason) = response.error.as_deref() {
                warn!("Segmentation rejected by server: {}", reason);
            }
            return Err(InferenceError::application(SEGMENTATION_FAILED));
        }
    };

    let annotated_image_chars = encoded.len();
    let annotated_image = decode_raster(&decode_payload(encoded)?)?;
    // The mask is extra detail; an unreadable one is dropped, not fatal.
    let mask = match response.mask.as_deref().filter(|m| !m.trim().is_empty()) {
        Some(mask) => match decode_payload(mask) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!("Ignoring undecodable segmentation mask: {}", e);
                None
            }
        },
        None => None,
    };
    let detections = response.detections.unwrap_or_default();

    debug!(
        width = annotated_image.width(),
        height = annotated_image.height(),
        detections = detections.len(),
        has_mask = mask.is_some(),
        "Segmentation decoded"
    );

    Ok(SegmentationResult {
        success: true,
        annotated_image_chars,
        annotated_image,
        detections,
        mask,
    })
}
