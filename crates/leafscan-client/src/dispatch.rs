//! Background submission with delivery onto the UI update loop.
//!
//! Requests run on the Tokio runtime. Their outcomes are never handed to
//! the caller from the network task; they are queued on a channel that only
//! the UI loop drains, so every endpoint reaches the UI the same way.

use std::fmt;

use image::DynamicImage;
use leafscan_models::{Endpoint, InferenceResult};
use tokio::sync::mpsc;
use tracing::{debug, info_span, Instrument};
use uuid::Uuid;

use crate::client::InferenceClient;
use crate::error::ClientResult;

/// Identifies one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of one submission, as seen by the UI loop.
#[derive(Debug)]
pub struct Delivery {
    pub request_id: RequestId,
    pub endpoint: Endpoint,
    pub outcome: ClientResult<InferenceResult>,
}

/// Receiving half, owned by the UI loop.
#[derive(Debug)]
pub struct DeliveryReceiver {
    rx: mpsc::UnboundedReceiver<Delivery>,
}

impl DeliveryReceiver {
    /// Wait for the next delivery. `None` once every dispatcher is dropped
    /// and the queue is drained.
    pub async fn recv(&mut self) -> Option<Delivery> {
        self.rx.recv().await
    }

    /// Non-blocking poll, for loops that redraw on their own schedule.
    pub fn try_recv(&mut self) -> Option<Delivery> {
        self.rx.try_recv().ok()
    }
}

/// Submits images in the background.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: InferenceClient,
    tx: mpsc::UnboundedSender<Delivery>,
}

impl Dispatcher {
    pub fn new(client: InferenceClient) -> (Self, DeliveryReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { client, tx }, DeliveryReceiver { rx })
    }

    /// Start a submission and return its id immediately.
    ///
    /// Must be called from within a Tokio runtime. No in-flight guard is
    /// applied here; overlapping submissions are delivered in completion
    /// order.
    pub fn submit(&self, image: DynamicImage, endpoint: Endpoint) -> RequestId {
        let request_id = RequestId::new();
        let client = self.client.clone();
        let tx = self.tx.clone();
        let span = info_span!("dispatch", request_id = %request_id, endpoint = %endpoint);

        tokio::spawn(
            async move {
                let outcome = client.submit(&image, endpoint).await;
                let delivery = Delivery {
                    request_id,
                    endpoint,
                    outcome,
                };
                if tx.send(delivery).is_err() {
                    debug!("UI loop gone, dropping delivery");
                }
            }
            .instrument(span),
        );

        request_id
    }
}
