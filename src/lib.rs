//! Intake core for a heart-disease risk form: collects thirteen clinical
//! measurements, validates them into a fixed-order feature vector, submits it
//! to a remote classifier and turns the reply into a user-facing outcome.

pub mod config;
pub mod core;
pub mod intake;
pub mod persistence;
pub mod prediction;

pub use config::KardiaConfig;
pub use crate::core::{
    KardiaError,
    SubmissionTasks,
};
pub use intake::{
    FieldKey,
    IntakeForm,
    RiskLabel,
    SubmissionOutcome,
};
pub use prediction::{
    PredictionClient,
    PredictionError,
    Predictor,
};
