//! Integration tests for the inference client against mock servers.
//!
//! Every test talks to a local `wiremock` server; no inference server is
//! needed:
//!   cargo test -p leafscan-client --test integration

pub mod detection_tests;
pub mod probe_tests;
pub mod transport_tests;

use std::time::Duration;

use image::{DynamicImage, Rgb, RgbImage};
use leafscan_client::{ClientConfig, InferenceClient};
use wiremock::MockServer;

/// Client pointed at a mock server with the production timeouts.
pub fn client_for(server: &MockServer) -> InferenceClient {
    InferenceClient::new(ClientConfig::new(&server.uri()).unwrap()).unwrap()
}

/// Client pointed at a mock server with short timeouts.
pub fn impatient_client_for(server: &MockServer) -> InferenceClient {
    let config = ClientConfig::new(&server.uri()).unwrap().with_timeouts(
        Duration::from_millis(500),
        Duration::from_millis(200),
        Duration::from_millis(200),
    );
    InferenceClient::new(config).unwrap()
}

/// A small leaf-green test image.
pub fn leaf_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 64) as u8, 120 + (y % 100) as u8, 40])
    }))
}

/// Base64 JPEG as the server would send it.
pub fn annotated_jpeg_base64(width: u32, height: u32) -> String {
    leafscan_client::encode(&leaf_image(width, height), false).unwrap()
}
