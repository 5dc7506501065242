//! `/predict_detection` round trips.

use leafscan_client::InferenceError;
use leafscan_models::Endpoint;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{annotated_jpeg_base64, client_for, leaf_image};

#[tokio::test]
async fn test_detection_decodes_annotated_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict_detection"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "annotated_image": annotated_jpeg_base64(48, 36) })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .submit(&leaf_image(48, 36), Endpoint::Detection)
        .await
        .unwrap();

    let image = result.annotated_image().unwrap();
    assert!(image.width() > 0 && image.height() > 0);
    assert_eq!((image.width(), image.height()), (48, 36));
    assert!(result.as_detection().unwrap().detections.is_empty());
}

#[tokio::test]
async fn test_detection_sends_raw_base64() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict_detection"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "annotated_image": annotated_jpeg_base64(4, 4) })),
        )
        .mount(&server)
        .await;

    client_for(&server).detect(&leaf_image(4, 4)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(!body["image"].as_str().unwrap().starts_with("data:"));
}

#[tokio::test]
async fn test_detection_with_boxes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict_detection"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "annotated_image": annotated_jpeg_base64(20, 20),
            "detections": [
                {"xmin": 2, "ymin": 3, "xmax": 12, "ymax": 15,
                 "confidence": 0.74, "class": 0, "name": "Anthracnose"},
                {"xmin": 5, "ymin": 5, "xmax": 9, "ymax": 9,
                 "confidence": 0.51, "class": 3, "name": "Fresh"}
            ]
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).detect(&leaf_image(20, 20)).await.unwrap();

    let names: Vec<&str> = result.detections.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Anthracnose", "Fresh"]);
    assert!(result.report().contains("Objects found: 2"));
}

#[tokio::test]
async fn test_detection_missing_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict_detection"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": false, "error": "boom"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).detect(&leaf_image(4, 4)).await.unwrap_err();

    assert_eq!(
        err,
        InferenceError::ApplicationFailure("No annotated image found in response".to_string())
    );
}

#[tokio::test]
async fn test_detection_garbage_image_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict_detection"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"annotated_image": "%%%not-base64%%%"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).detect(&leaf_image(4, 4)).await.unwrap_err();

    assert!(matches!(err, InferenceError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_detection_null_boxes_still_deliver_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict_detection"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "annotated_image": annotated_jpeg_base64(16, 12),
            "detections": null
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).detect(&leaf_image(16, 12)).await.unwrap();

    assert_eq!(result.annotated_image.width(), 16);
    assert!(result.detections.is_empty());
    assert!(result.report().contains("No objects reported."));
}
