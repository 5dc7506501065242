//! Per-screen request state, owned by the UI and threaded through the core.

use leafscan_models::InferenceResult;
use thiserror::Error;

use crate::dispatch::{Delivery, RequestId};

/// What a screen currently shows.
#[derive(Debug, Default)]
pub enum ScreenState {
    /// No request made since the image was picked
    #[default]
    Idle,
    /// A request is outstanding
    Loading { request_id: RequestId },
    /// Last request succeeded
    Ready(InferenceResult),
    /// Last request failed; holds the user-facing message
    Failed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("A request is already in flight ({0})")]
pub struct AlreadyLoading(pub RequestId);

impl ScreenState {
    /// A new image was picked; drop any previous result.
    pub fn select_image(&mut self) {
        *self = ScreenState::Idle;
    }

    /// Whether the submit trigger should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading { .. })
    }

    /// Enter the loading state for a new request.
    pub fn begin(&mut self, request_id: RequestId) -> Result<(), AlreadyLoading> {
        if let ScreenState::Loading { request_id: current } = self {
            return Err(AlreadyLoading(*current));
        }
        *self = ScreenState::Loading { request_id };
        Ok(())
    }

    /// Apply a delivery. Returns `false` and leaves the state untouched if
    /// the delivery is not for the outstanding request.
    pub fn settle(&mut self, delivery: Delivery) -> bool {
        match self {
            ScreenState::Loading { request_id } if *request_id == delivery.request_id => {}
            _ => return false,
        }

        *self = match delivery.outcome {
            Ok(result) => ScreenState::Ready(result),
            Err(e) => ScreenState::Failed(e.user_message()),
        };
        true
    }

    /// Text for the result card, if there is anything to show.
    pub fn display_text(&self) -> Option<String> {
        match self {
            ScreenState::Idle | ScreenState::Loading { .. } => None,
            ScreenState::Ready(result) => Some(result.display_text()),
            ScreenState::Failed(message) => Some(message.clone()),
        }
    }
}
