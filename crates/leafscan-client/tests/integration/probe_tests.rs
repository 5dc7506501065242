//! `/health` and `/model_info`.

use leafscan_client::InferenceError;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client_for;

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "healthy", "model_loaded": true})),
        )
        .mount(&server)
        .await;

    let health = client_for(&server).health_check().await.unwrap();

    assert!(health.is_healthy());
    assert!(health.model_loaded);
}

#[tokio::test]
async fn test_health_check_server_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).health_check().await.unwrap_err();

    assert_eq!(err, InferenceError::ServerError(503));
}

#[tokio::test]
async fn test_model_info() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/model_info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "model_info": {
                "input_shape": [null, 224, 224, 3],
                "output_shape": [null, 2],
                "num_classes": 2,
                "class_names": ["Fresh", "Anthracnose"],
                "image_size": [224, 224]
            }
        })))
        .mount(&server)
        .await;

    let info = client_for(&server).model_info().await.unwrap();

    assert_eq!(info.num_classes, 2);
    assert_eq!(info.class_names, vec!["Fresh", "Anthracnose"]);
    assert_eq!(info.image_size, vec![224, 224]);
}

#[tokio::test]
async fn test_model_info_not_loaded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/model_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false, "error": "Model not loaded"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).model_info().await.unwrap_err();

    assert_eq!(
        err,
        InferenceError::ApplicationFailure("Model not loaded".to_string())
    );
}
