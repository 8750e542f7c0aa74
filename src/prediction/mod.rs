use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::intake::{
    Batch,
    RiskLabel,
};

pub mod api;

pub use api::PredictionClient;

pub const NETWORK_FAILURE_MESSAGE: &str = "Prediction failed: Could not connect to the server.";
pub const INVALID_RESPONSE_MESSAGE: &str = "Prediction failed: Unexpected response from server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionResponse {
    pub prediction: RiskLabel,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// The service answered with a non-2xx status. `body` holds the decoded
    /// JSON body, or the raw text as a JSON string when it was not JSON.
    #[error("prediction service responded with HTTP {status}")]
    Service { status: u16, body: Option<Value> },

    #[error("no response from prediction service: {0}")]
    Network(String),

    #[error("failed to issue prediction request: {0}")]
    Client(String),

    #[error("malformed prediction response: {0}")]
    InvalidResponse(String),
}

impl PredictionError {
    /// Message shown to the user in place of a prediction.
    pub fn user_message(&self) -> String {
        match self {
            PredictionError::Service { status, body } => {
                match body.as_ref().and_then(service_error_text) {
                    Some(text) => format!("Prediction failed: {text}"),
                    None => format!("Prediction failed: Server responded with status {status}"),
                }
            }
            PredictionError::Network(_) => NETWORK_FAILURE_MESSAGE.to_string(),
            PredictionError::Client(message) => format!("Prediction failed: {message}"),
            PredictionError::InvalidResponse(_) => INVALID_RESPONSE_MESSAGE.to_string(),
        }
    }
}

/// Embedded `error`/`message` text when present, otherwise the body itself.
fn service_error_text(body: &Value) -> Option<String> {
    let embedded = match body {
        Value::Object(map) => {
            ["error", "message"].iter().find_map(|field| map.get(*field).and_then(Value::as_str))
        }
        Value::String(raw) => Some(raw.as_str()),
        Value::Null => return None,
        _ => None,
    };

    match embedded {
        Some(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        None => Some(body.to_string()),
    }
}

/// The network boundary the intake form submits through.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, batch: &Batch) -> Result<PredictionResponse, PredictionError>;
}
