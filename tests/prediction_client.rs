mod common;

use std::time::Duration;

use common::{
    client_for,
    client_with_timeout,
    filled_form,
    sample_body,
    unreachable_client,
};
use kardia::{
    intake::{
        build_feature_vector,
        Batch,
    },
    KardiaConfig,
    KardiaError,
    PredictionClient,
    PredictionError,
    Predictor,
    RiskLabel,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::{
    matchers::{
        body_json,
        header,
        method,
        path,
    },
    Mock,
    MockServer,
    ResponseTemplate,
};

fn sample_batch() -> Batch {
    Batch::single(build_feature_vector(filled_form().state()).unwrap())
}

#[tokio::test]
async fn posts_single_row_batch_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(header("content-type", "application/json"))
        .and(body_json(sample_body()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prediction": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).predict(&sample_batch()).await.unwrap();
    assert_eq!(response.prediction, RiskLabel::High);
}

#[tokio::test]
async fn low_prediction_maps_to_low_label() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prediction": 0 })))
        .mount(&server)
        .await;

    let response = client_for(&server).predict(&sample_batch()).await.unwrap();
    assert_eq!(response.prediction, RiskLabel::Low);
}

#[tokio::test]
async fn error_status_surfaces_service_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "bad input" })))
        .mount(&server)
        .await;

    let err = client_for(&server).predict(&sample_batch()).await.unwrap_err();
    assert_eq!(
        err,
        PredictionError::Service { status: 400, body: Some(json!({ "error": "bad input" })) }
    );
    assert_eq!(err.user_message(), "Prediction failed: bad input");
}

#[tokio::test]
async fn error_status_without_body_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(500)).mount(&server).await;

    let err = client_for(&server).predict(&sample_batch()).await.unwrap_err();
    assert_eq!(err, PredictionError::Service { status: 500, body: None });
    assert_eq!(err.user_message(), "Prediction failed: Server responded with status 500");
}

#[tokio::test]
async fn plain_text_error_body_is_kept_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("model is reloading"))
        .mount(&server)
        .await;

    let err = client_for(&server).predict(&sample_batch()).await.unwrap_err();
    assert_eq!(err.user_message(), "Prediction failed: model is reloading");
}

#[tokio::test]
async fn out_of_range_prediction_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prediction": 7 })))
        .mount(&server)
        .await;

    match client_for(&server).predict(&sample_batch()).await {
        Err(PredictionError::InvalidResponse(detail)) => assert!(detail.contains('7')),
        other => panic!("Expected InvalidResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    match unreachable_client().predict(&sample_batch()).await {
        Err(PredictionError::Network(_)) => {}
        other => panic!("Expected Network error, got {:?}", other),
    }
}

#[tokio::test]
async fn timeout_is_a_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "prediction": 1 }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = client_with_timeout(&server, Some(Duration::from_millis(200)));
    match client.predict(&sample_batch()).await {
        Err(PredictionError::Network(_)) => {}
        other => panic!("Expected Network error, got {:?}", other),
    }
}

#[tokio::test]
async fn detail_body_without_error_field_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({ "detail": "features must be 13 columns" })),
        )
        .mount(&server)
        .await;

    let mut form = filled_form();
    let outcome = form.submit(&client_for(&server)).await;
    assert_eq!(
        outcome.message(),
        Some(r#"Prediction failed: {"detail":"features must be 13 columns"}"#)
    );
}

#[tokio::test]
async fn client_built_from_saved_config_reaches_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(sample_body()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prediction": 0 })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("kardia").join("config.json");
    KardiaConfig { endpoint: format!("{}/predict", server.uri()), timeout_secs: Some(5) }
        .save_to(&config_path)
        .unwrap();

    let config = KardiaConfig::load_or_default(&config_path);
    let client = PredictionClient::from_config(&config).unwrap();
    assert_eq!(client.endpoint().as_str(), format!("{}/predict", server.uri()));

    let response = client.predict(&sample_batch()).await.unwrap();
    assert_eq!(response.prediction, RiskLabel::Low);
}

#[test]
fn client_from_config_rejects_bad_endpoint() {
    let config =
        KardiaConfig { endpoint: "ftp://127.0.0.1/predict".to_string(), timeout_secs: None };
    match PredictionClient::from_config(&config) {
        Err(KardiaError::InvalidEndpoint { endpoint, .. }) => {
            assert_eq!(endpoint, "ftp://127.0.0.1/predict")
        }
        other => panic!("Expected InvalidEndpoint, got {:?}", other),
    }
}
