use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::CONTENT_TYPE,
    Client,
    StatusCode,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{
    debug,
    warn,
};
use url::Url;

use super::{
    PredictionError,
    PredictionResponse,
    Predictor,
};
use crate::{
    config::KardiaConfig,
    core::{
        http::http_client,
        KardiaError,
    },
    intake::{
        Batch,
        RiskLabel,
    },
};

#[derive(Debug, Deserialize)]
struct RawPrediction {
    prediction: Value,
}

/// HTTP client for the remote classifier. One POST per call, no retries.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    endpoint: Url,
}

impl PredictionClient {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, KardiaError> {
        Ok(Self { client: http_client(timeout)?, endpoint })
    }

    pub fn from_config(config: &KardiaConfig) -> Result<Self, KardiaError> {
        Self::new(config.endpoint_url()?, config.timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Predictor for PredictionClient {
    async fn predict(&self, batch: &Batch) -> Result<PredictionResponse, PredictionError> {
        let body = serde_json::to_vec(batch).map_err(|e| PredictionError::Client(e.to_string()))?;

        debug!(endpoint = %self.endpoint, rows = batch.rows().len(), "Sending prediction request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        let bytes =
            response.bytes().await.map_err(|e| classify_body_error(status, e.to_string()))?;

        if !status.is_success() {
            let body = parse_error_body(&bytes);
            warn!(status = status.as_u16(), ?body, "Prediction service rejected request");
            return Err(PredictionError::Service { status: status.as_u16(), body });
        }

        let response = parse_prediction(&bytes)?;
        debug!(prediction = response.prediction.as_prediction(), "Prediction received");
        Ok(response)
    }
}

fn classify_send_error(error: reqwest::Error) -> PredictionError {
    if error.is_builder() {
        PredictionError::Client(error.to_string())
    } else {
        warn!(%error, "Prediction request got no response");
        PredictionError::Network(error.to_string())
    }
}

/// A body that fails to arrive after an error status still counts as a
/// service answer, not a lost connection.
fn classify_body_error(status: StatusCode, error: String) -> PredictionError {
    if status.is_success() {
        PredictionError::Network(error)
    } else {
        warn!(status = status.as_u16(), %error, "Failed to read prediction error body");
        PredictionError::Service { status: status.as_u16(), body: None }
    }
}

fn parse_error_body(bytes: &[u8]) -> Option<Value> {
    if bytes.is_empty() {
        return None;
    }

    serde_json::from_slice::<Value>(bytes)
        .ok()
        .or_else(|| Some(Value::String(String::from_utf8_lossy(bytes).into_owned())))
}

fn parse_prediction(bytes: &[u8]) -> Result<PredictionResponse, PredictionError> {
    let raw: RawPrediction = serde_json::from_slice(bytes)
        .map_err(|e| PredictionError::InvalidResponse(format!("undecodable body: {e}")))?;

    raw.prediction
        .as_i64()
        .and_then(RiskLabel::from_prediction)
        .map(|prediction| PredictionResponse { prediction })
        .ok_or_else(|| {
            PredictionError::InvalidResponse(format!(
                "unexpected prediction value {}",
                raw.prediction
            ))
        })
}
