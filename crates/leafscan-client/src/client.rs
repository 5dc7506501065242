//! Inference server HTTP client.

use std::time::Instant;

use image::DynamicImage;
use leafscan_models::{
    ClassificationResult, DetectionResult, Endpoint, HealthStatus, InferenceRequest,
    InferenceResult, ModelInfo, ModelInfoResponse, SegmentationResult,
};
use reqwest::Client;
use tracing::{debug, info_span, warn, Instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::decode;
use crate::encoder;
use crate::error::{ClientResult, InferenceError};
use crate::metrics::record_request;

/// Client for the leaf inference server.
///
/// Holds no per-request state; cloning shares the underlying connection
/// pool, and concurrent submissions do not observe each other.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: Client,
    config: ClientConfig,
}

impl InferenceClient {
    /// Create a new inference client.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .timeout(config.total_timeout())
            .build()
            .map_err(|e| InferenceError::invalid_config(format!("HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit an image to an explicit endpoint URL.
    ///
    /// `endpoint` selects the payload form and the decoding strategy.
    /// Exactly one of result or error is returned; server input never
    /// causes a panic.
    pub async fn submit_to(
        &self,
        image: &DynamicImage,
        endpoint: Endpoint,
        url: &Url,
    ) -> ClientResult<InferenceResult> {
        self.run(image, endpoint, url, |body| {
            decode::decode_response(endpoint, body)
        })
        .await
    }

    /// Submit an image to the configured server.
    pub async fn submit(
        &self,
        image: &DynamicImage,
        endpoint: Endpoint,
    ) -> ClientResult<InferenceResult> {
        let url = self.config.endpoint_url(endpoint)?;
        self.submit_to(image, endpoint, &url).await
    }

    /// Classify leaf health.
    pub async fn classify(&self, image: &DynamicImage) -> ClientResult<ClassificationResult> {
        self.submit_typed(image, Endpoint::Classification, decode::decode_classification)
            .await
    }

    /// Detect objects and fetch the annotated image.
    pub async fn detect(&self, image: &DynamicImage) -> ClientResult<DetectionResult> {
        self.submit_typed(image, Endpoint::Detection, decode::decode_detection)
            .await
    }

    /// Segment lesions and fetch the overlaid image.
    pub async fn segment(&self, image: &DynamicImage) -> ClientResult<SegmentationResult> {
        self.submit_typed(image, Endpoint::Segmentation, decode::decode_segmentation)
            .await
    }

    /// Fetch the server's health status.
    pub async fn health_check(&self) -> ClientResult<HealthStatus> {
        let body = self.get_json("health").await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch the classification model's shape and labels.
    pub async fn model_info(&self) -> ClientResult<ModelInfo> {
        let body = self.get_json("model_info").await?;
        let response: ModelInfoResponse = serde_json::from_slice(&body)?;

        match response.model_info {
            Some(info) if response.success => Ok(info),
            _ => Err(InferenceError::application(
                response
                    .error
                    .unwrap_or_else(|| "Model info unavailable".to_string()),
            )),
        }
    }

    async fn submit_typed<T>(
        &self,
        image: &DynamicImage,
        endpoint: Endpoint,
        decode: fn(&[u8]) -> ClientResult<T>,
    ) -> ClientResult<T> {
        let url = self.config.endpoint_url(endpoint)?;
        self.run(image, endpoint, &url, decode).await
    }

    /// One request/response cycle: encode, send, decode, record.
    async fn run<T, F>(
        &self,
        image: &DynamicImage,
        endpoint: Endpoint,
        url: &Url,
        decode: F,
    ) -> ClientResult<T>
    where
        F: FnOnce(&[u8]) -> ClientResult<T>,
    {
        let span = info_span!("inference", endpoint = %endpoint, url = %url);
        async move {
            let started = Instant::now();
            let outcome = match self.post_image(image, endpoint, url).await {
                Ok(body) => decode(&body),
                Err(e) => Err(e),
            };
            finish(endpoint, started, &outcome);
            outcome
        }
        .instrument(span)
        .await
    }

    /// Encode, POST, and return the raw body of a 2xx response.
    async fn post_image(
        &self,
        image: &DynamicImage,
        endpoint: Endpoint,
        url: &Url,
    ) -> ClientResult<Vec<u8>> {
        let payload = encoder::encode_for(image, endpoint.payload_form())?;
        let request = InferenceRequest::new(payload);

        debug!(
            width = image.width(),
            height = image.height(),
            payload_chars = request.image.len(),
            "Sending inference request"
        );

        // `.json()` sets `Content-Type: application/json`.
        let response = self.http.post(url.clone()).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InferenceError::ServerError(status.as_u16()));
        }

        read_body(response).await
    }

    async fn get_json(&self, path: &str) -> ClientResult<Vec<u8>> {
        let url = self.config.route_url(path)?;
        debug!("Querying {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("{} returned {}", path, status);
            return Err(InferenceError::ServerError(status.as_u16()));
        }

        read_body(response).await
    }
}

async fn read_body(response: reqwest::Response) -> ClientResult<Vec<u8>> {
    let body = response.bytes().await?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(InferenceError::EmptyResponse);
    }
    Ok(body.to_vec())
}

fn finish<T>(endpoint: Endpoint, started: Instant, outcome: &ClientResult<T>) {
    let elapsed = started.elapsed();
    match outcome {
        Ok(_) => {
            debug!(elapsed_ms = elapsed.as_millis() as u64, "Inference succeeded");
            record_request(endpoint.as_str(), "ok", elapsed);
        }
        Err(e) => {
            warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                kind = e.kind(),
                "Inference failed: {}",
                e
            );
            record_request(endpoint.as_str(), e.kind(), elapsed);
        }
    }
}
