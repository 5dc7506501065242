//! Client for the leaf inference server.
//!
//! This crate provides:
//! - JPEG/base64 image encoding for request payloads
//! - One parameterized HTTP client for the classification, detection and
//!   segmentation routes, with typed results and a typed error taxonomy
//! - Background dispatch that delivers outcomes onto a single UI loop
//! - Explicit per-screen request state

pub mod client;
pub mod config;
pub mod decode;
pub mod dispatch;
pub mod encoder;
pub mod error;
pub mod metrics;
pub mod screen;

pub use client::InferenceClient;
pub use config::ClientConfig;
pub use dispatch::{Delivery, DeliveryReceiver, Dispatcher, RequestId};
pub use encoder::{encode, DATA_URL_PREFIX, JPEG_QUALITY};
pub use error::{ClientResult, InferenceError};
pub use screen::ScreenState;
