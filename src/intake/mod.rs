pub mod form;
pub mod outcome;
pub mod schema;
pub mod state;
pub mod vector;

pub use form::{
    IntakeForm,
    SubmissionTicket,
};
pub use outcome::{
    render,
    RiskLabel,
    SubmissionOutcome,
};
pub use schema::{
    FieldKey,
    FieldKind,
    FieldSpec,
    FEATURE_COUNT,
    FIELD_SCHEMA,
};
pub use state::FormState;
pub use vector::{
    build_feature_vector,
    Batch,
    FeatureValue,
    FeatureVector,
    ValidationError,
    VALIDATION_FAILURE_MESSAGE,
};
