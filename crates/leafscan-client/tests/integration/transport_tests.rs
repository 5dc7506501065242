//! Transport-level failures shared by every endpoint.

use std::time::Duration;

use leafscan_client::{ClientConfig, InferenceClient, InferenceError};
use leafscan_models::Endpoint;
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{client_for, impatient_client_for, leaf_image};

#[tokio::test]
async fn test_server_error_for_every_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"success": true, "error": "x"})),
        )
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server);
    for endpoint in Endpoint::ALL {
        let err = client
            .submit(&leaf_image(8, 8), *endpoint)
            .await
            .unwrap_err();
        assert_eq!(err, InferenceError::ServerError(500), "{endpoint}");
    }
}

#[tokio::test]
async fn test_empty_body_for_every_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    for endpoint in Endpoint::ALL {
        let err = client
            .submit(&leaf_image(8, 8), *endpoint)
            .await
            .unwrap_err();
        assert_eq!(err, InferenceError::EmptyResponse, "{endpoint}");
    }
}

#[tokio::test]
async fn test_timeout_is_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = impatient_client_for(&server)
        .submit(&leaf_image(8, 8), Endpoint::Segmentation)
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::NetworkFailure(_)), "{err:?}");
}

#[tokio::test]
async fn test_connection_refused_is_network_failure() {
    // Reserve a port, then free it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = ClientConfig::new(&format!("http://127.0.0.1:{}", port)).unwrap();
    let client = InferenceClient::new(config).unwrap();

    let err = client
        .submit(&leaf_image(8, 8), Endpoint::Classification)
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::NetworkFailure(_)));
    assert!(err.user_message().starts_with("Request failed: "));
}

#[tokio::test]
async fn test_submit_to_explicit_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(wiremock::matchers::path("/v2/leaf/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "prediction": {
                "predicted_class": "Fresh",
                "predicted_class_index": 3,
                "confidence": 0.88,
                "all_probabilities": {"Fresh": 0.88}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let url = url::Url::parse(&format!("{}/v2/leaf/classify", server.uri())).unwrap();
    let result = client_for(&server)
        .submit_to(&leaf_image(8, 8), Endpoint::Classification, &url)
        .await
        .unwrap();

    assert_eq!(result.display_text(), "Fresh");
}
