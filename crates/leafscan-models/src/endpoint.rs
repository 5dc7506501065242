//! Inference endpoints exposed by the leaf server.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the image is embedded in the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadForm {
    /// Bare base64 of the JPEG bytes
    RawBase64,
    /// `data:image/jpeg;base64,` followed by the base64 payload
    DataUrl,
}

/// The three analyses offered by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// Leaf health classification
    Classification,
    /// Object detection with bounding boxes
    Detection,
    /// Lesion segmentation
    Segmentation,
}

impl Endpoint {
    /// All endpoints, in screen order.
    pub const ALL: &'static [Endpoint] = &[
        Endpoint::Classification,
        Endpoint::Detection,
        Endpoint::Segmentation,
    ];

    /// Route path relative to the server base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Classification => "predict",
            Endpoint::Detection => "predict_detection",
            Endpoint::Segmentation => "predict_segmentation",
        }
    }

    /// Payload form the server expects for this endpoint.
    ///
    /// Segmentation strips a data-URL prefix server-side, the other two
    /// routes decode the string directly.
    pub fn payload_form(&self) -> PayloadForm {
        match self {
            Endpoint::Segmentation => PayloadForm::DataUrl,
            Endpoint::Classification | Endpoint::Detection => PayloadForm::RawBase64,
        }
    }

    /// Short name used in logs and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Classification => "classification",
            Endpoint::Detection => "detection",
            Endpoint::Segmentation => "segmentation",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = EndpointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classification" | "classify" | "predict" => Ok(Endpoint::Classification),
            "detection" | "detect" | "predict_detection" => Ok(Endpoint::Detection),
            "segmentation" | "segment" | "predict_segmentation" => Ok(Endpoint::Segmentation),
            _ => Err(EndpointParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown endpoint: {0}")]
pub struct EndpointParseError(String);
