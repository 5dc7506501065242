//! Classification (`/predict`) response types.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Raw `/predict` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub prediction: Option<ClassificationResult>,
    /// Server-side failure reason, sent alongside `success: false`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A single leaf-health prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Winning label
    pub predicted_class: String,
    /// Index of the winning label in the model's class list
    pub predicted_class_index: u32,
    /// Probability of the winning label, in [0, 1]
    pub confidence: f64,
    /// Probability per label
    #[serde(default)]
    pub all_probabilities: BTreeMap<String, f64>,
}

impl ClassificationResult {
    /// Text shown on the result card.
    pub fn summary(&self) -> String {
        self.predicted_class.clone()
    }

    /// Long form with confidence and the full probability table,
    /// most likely label first.
    pub fn detailed(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Class: {}", self.predicted_class);
        let _ = writeln!(out, "Confidence: {}", percent(self.confidence));
        out.push_str("Probabilities:\n");

        let mut ranked: Vec<(&String, &f64)> = self.all_probabilities.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (label, prob) in ranked {
            let _ = writeln!(out, "  {}: {}", label, percent(*prob));
        }
        out
    }
}

fn percent(p: f64) -> String {
    format!("{:.2}%", p * 100.0)
}
