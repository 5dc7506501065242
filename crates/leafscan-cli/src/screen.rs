//! Terminal stand-in for an analysis screen.
//!
//! Mirrors what the app screens do: submit in the background, show a
//! loading state, then render whatever arrives on the delivery channel.

use std::path::Path;

use anyhow::{Context, Result};
use image::DynamicImage;
use leafscan_client::{DeliveryReceiver, Dispatcher, ScreenState};
use leafscan_models::{Endpoint, InferenceResult};
use tracing::info;

/// Submit one image and drive the screen until its request settles.
pub async fn run_screen(
    dispatcher: &Dispatcher,
    deliveries: &mut DeliveryReceiver,
    image: DynamicImage,
    endpoint: Endpoint,
) -> Result<ScreenState> {
    let mut screen = ScreenState::default();
    screen.select_image();

    let request_id = dispatcher.submit(image, endpoint);
    screen.begin(request_id)?;
    info!(%request_id, %endpoint, "Processing...");

    while screen.is_loading() {
        let delivery = deliveries
            .recv()
            .await
            .context("delivery channel closed before the request settled")?;
        screen.settle(delivery);
    }

    Ok(screen)
}

/// Result card text. `detailed` expands classification output.
pub fn render(screen: &ScreenState, detailed: bool) -> Option<String> {
    match screen {
        ScreenState::Ready(InferenceResult::Classification(c)) if detailed => Some(c.detailed()),
        other => other.display_text(),
    }
}

/// Write the annotated image, if the result has one. Returns whether a
/// file was written.
pub fn save_annotated(screen: &ScreenState, path: &Path) -> Result<bool> {
    let ScreenState::Ready(result) = screen else {
        return Ok(false);
    };
    let Some(image) = result.annotated_image() else {
        return Ok(false);
    };
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}
