//! Object detection (`/predict_detection`) types.

use std::fmt::Write as _;

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient;

/// Raw `/predict_detection` response.
///
/// `annotated_image` is kept untyped so a non-string value can be reported
/// as a missing image rather than a parse failure. Every other field is
/// optional to the client and decodes leniently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionResponse {
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotated_image: Option<Value>,
    /// Boxes that decode; malformed entries are dropped
    #[serde(default, deserialize_with = "lenient::list")]
    pub detections: Vec<DetectedObject>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
}

impl DetectionResponse {
    /// The annotated image, if the server sent it as a string.
    pub fn annotated_image_str(&self) -> Option<&str> {
        self.annotated_image.as_ref().and_then(Value::as_str)
    }
}

/// One bounding box reported by the detector.
///
/// Missing, `null` or wrongly-typed fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub xmin: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub ymin: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub xmax: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub ymax: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub confidence: f64,
    #[serde(rename = "class", default, deserialize_with = "lenient::or_default")]
    pub class_id: u32,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
}

/// Decoded detection outcome.
#[derive(Debug, Clone)]
pub struct DetectionResult {
    /// Input image with boxes drawn by the server
    pub annotated_image: DynamicImage,
    /// Boxes, in server order; empty when the server omits them
    pub detections: Vec<DetectedObject>,
}

impl DetectionResult {
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Annotated image: {}x{}",
            self.annotated_image.width(),
            self.annotated_image.height()
        );
        if self.detections.is_empty() {
            out.push_str("No objects reported.\n");
            return out;
        }
        let _ = writeln!(out, "Objects found: {}", self.detections.len());
        for obj in &self.detections {
            let _ = writeln!(
                out,
                "  {} ({:.2}) at [{}, {}, {}, {}]",
                obj.name, obj.confidence, obj.xmin, obj.ymin, obj.xmax, obj.ymax
            );
        }
        out
    }
}
