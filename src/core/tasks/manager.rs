use std::sync::{
    mpsc,
    Arc,
};

use tokio::runtime::{
    Handle,
    Runtime,
};
use tracing::debug;

use super::SubmissionHandle;
use crate::{
    core::KardiaError,
    intake::SubmissionTicket,
    prediction::{
        PredictionError,
        PredictionResponse,
        Predictor,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    pub generation: u64,
    pub result: Result<PredictionResponse, PredictionError>,
}

/// Runs prediction requests off the UI thread and queues their results for
/// the next poll. At most one request is in flight; dispatching a new one
/// aborts the previous.
pub struct SubmissionTasks {
    handle: Handle,
    // Kept alive when the tasks own their runtime.
    _runtime: Option<Arc<Runtime>>,
    receiver: mpsc::Receiver<SubmissionResult>,
    sender: mpsc::Sender<SubmissionResult>,
    in_flight: Option<SubmissionHandle>,
}

impl SubmissionTasks {
    /// Creates a dedicated multi-threaded runtime for submissions.
    pub fn new() -> Result<Self, KardiaError> {
        let runtime = Runtime::new().map_err(|e| KardiaError::Runtime(e.to_string()))?;
        let handle = runtime.handle().clone();
        Ok(Self::build(handle, Some(Arc::new(runtime))))
    }

    /// Spawns onto an existing runtime instead of owning one.
    pub fn from_handle(handle: Handle) -> Self {
        Self::build(handle, None)
    }

    fn build(handle: Handle, runtime: Option<Arc<Runtime>>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { handle, _runtime: runtime, receiver, sender, in_flight: None }
    }

    pub fn dispatch(&mut self, ticket: SubmissionTicket, predictor: Arc<dyn Predictor>) {
        self.cancel();

        let sender = self.sender.clone();
        let SubmissionTicket { generation, batch } = ticket;
        let join_handle = self.handle.spawn(async move {
            let result = predictor.predict(&batch).await;
            let _ = sender.send(SubmissionResult { generation, result });
        });

        self.in_flight = Some(SubmissionHandle::new(generation, join_handle));
    }

    /// Aborts the in-flight request, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.in_flight.take() {
            if !task.is_finished() {
                debug!(generation = task.generation(), "Cancelling in-flight prediction");
                task.cancel();
            }
        }
    }

    /// Generation of the request still running, if any.
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight.as_ref().filter(|task| !task.is_finished()).map(SubmissionHandle::generation)
    }

    pub fn poll_results(&mut self) -> Vec<SubmissionResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        if self.in_flight.as_ref().is_some_and(SubmissionHandle::is_finished) {
            self.in_flight = None;
        }

        results
    }
}

impl Drop for SubmissionTasks {
    fn drop(&mut self) {
        self.cancel();
    }
}
