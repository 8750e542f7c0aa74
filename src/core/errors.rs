use thiserror::Error;

#[derive(Error, Debug)]
pub enum KardiaError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Invalid prediction endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Unknown intake field: {0}")]
    UnknownField(String),

    #[error("Failed to start async runtime: {0}")]
    Runtime(String),
}

impl From<std::io::Error> for KardiaError {
    fn from(error: std::io::Error) -> Self {
        KardiaError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for KardiaError {
    fn from(error: reqwest::Error) -> Self {
        KardiaError::Reqwest(Box::new(error))
    }
}
