use std::sync::Arc;

use tracing::{
    debug,
    info,
};

use super::{
    outcome::SubmissionOutcome,
    schema::FieldKey,
    state::FormState,
    vector::{
        build_feature_vector,
        Batch,
    },
};
use crate::{
    core::{
        tasks::SubmissionResult,
        KardiaError,
        SubmissionTasks,
    },
    prediction::{
        PredictionError,
        PredictionResponse,
        Predictor,
    },
};

/// A validated batch waiting to be sent, tagged with the generation that
/// issued it.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    pub generation: u64,
    pub batch: Batch,
}

/// Field values plus the outcome of the latest submission.
///
/// Every submit attempt takes a new generation number. Results carrying an
/// older generation are discarded, so only the most recent attempt can write
/// the outcome.
#[derive(Debug, Default)]
pub struct IntakeForm {
    state: FormState,
    outcome: SubmissionOutcome,
    generation: u64,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    pub fn is_pending(&self) -> bool {
        self.outcome.is_pending()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn update_field(&mut self, key: FieldKey, raw_value: impl Into<String>) {
        self.state.set(key, raw_value);
    }

    pub fn update_field_by_name(
        &mut self,
        name: &str,
        raw_value: impl Into<String>,
    ) -> Result<(), KardiaError> {
        let key: FieldKey = name.parse()?;
        self.update_field(key, raw_value);
        Ok(())
    }

    /// Clears every field and the outcome. An in-flight result will be ignored.
    pub fn reset(&mut self) {
        self.state.clear();
        self.outcome = SubmissionOutcome::Idle;
        self.generation += 1;
    }

    /// Validates the form and, if every field parses, marks the form pending
    /// and returns the batch to send. On validation failure the outcome is set
    /// to the aggregate validation message and nothing is returned.
    pub fn begin_submit(&mut self) -> Option<SubmissionTicket> {
        self.generation += 1;

        match build_feature_vector(&self.state) {
            Ok(vector) => {
                self.outcome = SubmissionOutcome::Pending;
                debug!(generation = self.generation, "Submission started");
                Some(SubmissionTicket { generation: self.generation, batch: Batch::single(vector) })
            }
            Err(err) => {
                let invalid: Vec<&str> = err.invalid.iter().map(FieldKey::as_str).collect();
                debug!(generation = self.generation, ?invalid, "Submission blocked by validation");
                self.outcome = SubmissionOutcome::Failure(err.to_string());
                None
            }
        }
    }

    /// Applies a prediction result. Returns `false` when the result belongs to
    /// a superseded submission and was dropped.
    pub fn complete_submit(
        &mut self,
        generation: u64,
        result: Result<PredictionResponse, PredictionError>,
    ) -> bool {
        if generation != self.generation || !self.outcome.is_pending() {
            debug!(generation, current = self.generation, "Dropping stale prediction result");
            return false;
        }

        self.outcome = match result {
            Ok(response) => {
                info!(prediction = response.prediction.as_prediction(), "Prediction succeeded");
                SubmissionOutcome::Success(response.prediction)
            }
            Err(err) => {
                info!(error = %err, "Prediction failed");
                SubmissionOutcome::Failure(err.user_message())
            }
        };
        true
    }

    /// Runs a full submission inline: validate, predict, record the outcome.
    pub async fn submit<P: Predictor + ?Sized>(&mut self, predictor: &P) -> &SubmissionOutcome {
        if let Some(ticket) = self.begin_submit() {
            let result = predictor.predict(&ticket.batch).await;
            self.complete_submit(ticket.generation, result);
        }
        &self.outcome
    }

    /// Starts a submission on `tasks` without blocking the caller. Any
    /// earlier in-flight request is cancelled. Returns whether a request was
    /// dispatched.
    pub fn dispatch(&mut self, tasks: &mut SubmissionTasks, predictor: Arc<dyn Predictor>) -> bool {
        match self.begin_submit() {
            Some(ticket) => {
                tasks.dispatch(ticket, predictor);
                true
            }
            None => {
                tasks.cancel();
                false
            }
        }
    }

    /// Applies every finished result from `tasks`. Returns whether the
    /// outcome changed.
    pub fn poll(&mut self, tasks: &mut SubmissionTasks) -> bool {
        let mut changed = false;
        for SubmissionResult { generation, result } in tasks.poll_results() {
            changed |= self.complete_submit(generation, result);
        }
        changed
    }
}
