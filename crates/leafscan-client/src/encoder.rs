//! JPEG + base64 image encoding for request payloads.
//!
//! Outbound images are always JPEG at [`JPEG_QUALITY`], base64 with the
//! standard alphabet and no line breaks. Inbound server images are decoded
//! leniently: an optional data-URL prefix and embedded whitespace are
//! accepted.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use leafscan_models::PayloadForm;

use crate::error::{ClientResult, InferenceError};

/// JPEG quality for every outbound image. Fixed per protocol, not per call.
pub const JPEG_QUALITY: u8 = 90;

/// Prefix of the data-URL payload form.
pub const DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// Compress a raster to JPEG bytes.
pub fn encode_jpeg(image: &DynamicImage) -> ClientResult<Vec<u8>> {
    if image.width() == 0 || image.height() == 0 {
        return Err(InferenceError::encoding(format!(
            "image has no pixels ({}x{})",
            image.width(),
            image.height()
        )));
    }

    // JPEG has no alpha channel and no 16-bit samples.
    let rgb = image.to_rgb8();

    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    encoder
        .encode_image(&rgb)
        .map_err(|e| InferenceError::encoding(e.to_string()))?;
    Ok(buf)
}

/// Encode a raster as raw base64, or as a data URL when `as_data_url` is set.
pub fn encode(image: &DynamicImage, as_data_url: bool) -> ClientResult<String> {
    let jpeg = encode_jpeg(image)?;
    let b64 = STANDARD.encode(jpeg);
    if as_data_url {
        Ok(format!("{}{}", DATA_URL_PREFIX, b64))
    } else {
        Ok(b64)
    }
}

/// Encode in the form a given endpoint expects.
pub fn encode_for(image: &DynamicImage, form: PayloadForm) -> ClientResult<String> {
    encode(image, form == PayloadForm::DataUrl)
}

/// Decode base64 text sent by the server.
pub fn decode_payload(text: &str) -> ClientResult<Vec<u8>> {
    let body = strip_data_url(text.trim());
    let compact: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| InferenceError::malformed(format!("invalid base64: {}", e)))
}

/// Decode compressed image bytes (JPEG, PNG) into a raster.
pub fn decode_raster(bytes: &[u8]) -> ClientResult<DynamicImage> {
    let reader = image::io::Reader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| InferenceError::malformed(format!("unreadable image: {}", e)))?;
    Ok(reader.decode()?)
}

fn strip_data_url(text: &str) -> &str {
    if text.starts_with("data:") {
        if let Some((_, payload)) = text.split_once(";base64,") {
            return payload;
        }
    }
    text
}
