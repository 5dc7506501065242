//! Segmentation (`/predict_segmentation`) types.

use std::fmt::Write as _;

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lenient;

/// One detection entry as sent by the server. Key order is preserved.
pub type DetectionEntry = Map<String, Value>;

/// Raw `/predict_segmentation` response.
///
/// Wrongly-typed fields read as absent: a non-bool `success` is false and
/// non-object detection entries are skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentationResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub annotated_image: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::objects",
        skip_serializing_if = "Option::is_none"
    )]
    pub detections: Option<Vec<DetectionEntry>>,
    /// Base64 of the raw mask, one byte per pixel
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub mask: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
}

impl SegmentationResponse {
    /// The annotated image, unless missing or blank.
    pub fn annotated_image_str(&self) -> Option<&str> {
        self.annotated_image
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

/// Decoded segmentation outcome.
#[derive(Debug, Clone)]
pub struct SegmentationResult {
    pub success: bool,
    /// Input image with the predicted mask overlaid
    pub annotated_image: DynamicImage,
    /// Length of the annotated image as received, in base64 characters
    pub annotated_image_chars: usize,
    /// Detection entries in server order
    pub detections: Vec<DetectionEntry>,
    /// Raw mask bytes, when the server sent them
    pub mask: Option<Vec<u8>>,
}

impl SegmentationResult {
    /// Fraction of mask pixels marked as lesion, if a mask was sent.
    pub fn mask_coverage(&self) -> Option<f64> {
        let mask = self.mask.as_ref()?;
        if mask.is_empty() {
            return Some(0.0);
        }
        let marked = mask.iter().filter(|b| **b != 0).count();
        Some(marked as f64 / mask.len() as f64)
    }

    /// Text shown under the segmented image.
    pub fn report(&self) -> String {
        let mut out = String::new();
        out.push_str("Segmentation successful\n");
        let _ = writeln!(
            out,
            "Annotated image size: {} characters",
            self.annotated_image_chars
        );
        let _ = writeln!(
            out,
            "Original image: {}x{}",
            self.annotated_image.width(),
            self.annotated_image.height()
        );
        if let Some(coverage) = self.mask_coverage() {
            let _ = writeln!(out, "Mask coverage: {:.2}%", coverage * 100.0);
        }

        if self.detections.is_empty() {
            out.push_str("No specific detections returned.");
            return out;
        }

        let _ = writeln!(out, "Detections found: {}\n", self.detections.len());
        for (index, detection) in self.detections.iter().enumerate() {
            let _ = writeln!(out, "Detection {}:", index + 1);
            for line in entry_lines(detection) {
                let _ = writeln!(out, "  {}", line);
            }
        }
        out
    }
}

/// Render one detection entry as `key: value` lines, in server order.
pub fn entry_lines(entry: &DetectionEntry) -> Vec<String> {
    entry
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{}: {}", key, s),
            other => format!("{}: {}", key, other),
        })
        .collect()
}
