use serde::Serialize;
use thiserror::Error;

use super::{
    schema::{
        FieldKey,
        FieldKind,
        FEATURE_COUNT,
        FIELD_SCHEMA,
    },
    state::FormState,
};

pub const VALIDATION_FAILURE_MESSAGE: &str =
    "Please fill all fields correctly. All values must be numbers.";

/// A single coerced measurement. Integers stay integral on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Integer(i64),
    Float(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([FeatureValue; FEATURE_COUNT]);

impl FeatureVector {
    pub fn get(&self, key: FieldKey) -> FeatureValue {
        self.0[key.index()]
    }

    pub fn values(&self) -> &[FeatureValue; FEATURE_COUNT] {
        &self.0
    }
}

/// Rows of feature vectors, the input shape the classifier expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Batch {
    features: Vec<FeatureVector>,
}

impl Batch {
    pub fn single(vector: FeatureVector) -> Self {
        Self { features: vec![vector] }
    }

    pub fn rows(&self) -> &[FeatureVector] {
        &self.features
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please fill all fields correctly. All values must be numbers.")]
pub struct ValidationError {
    pub invalid: Vec<FieldKey>,
}

/// Coerces one trimmed raw value according to its declared kind.
///
/// Integer fields must fit in an `i64`; larger values are rejected like any
/// other unparseable text.
pub fn parse_field(kind: FieldKind, raw: &str) -> Option<FeatureValue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match kind {
        FieldKind::Integer => trimmed.parse::<i64>().ok().map(FeatureValue::Integer),
        FieldKind::Float => trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(FeatureValue::Float),
    }
}

/// Projects the form through the schema. All fields must parse or the whole
/// vector is rejected.
pub fn build_feature_vector(state: &FormState) -> Result<FeatureVector, ValidationError> {
    let mut values = [FeatureValue::Integer(0); FEATURE_COUNT];
    let mut invalid = Vec::new();

    for (slot, spec) in values.iter_mut().zip(FIELD_SCHEMA.iter()) {
        match parse_field(spec.kind, state.get(spec.key)) {
            Some(value) => *slot = value,
            None => invalid.push(spec.key),
        }
    }

    if !invalid.is_empty() {
        return Err(ValidationError { invalid });
    }

    Ok(FeatureVector(values))
}
