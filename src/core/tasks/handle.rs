use tokio::task::JoinHandle;

/// The spawned prediction task for one submission generation.
pub struct SubmissionHandle {
    generation: u64,
    join_handle: JoinHandle<()>,
}

impl SubmissionHandle {
    pub fn new(generation: u64, join_handle: JoinHandle<()>) -> Self {
        Self { generation, join_handle }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Aborts the request. Its result, if already sent, is still dropped as
    /// stale by the form.
    pub fn cancel(&self) {
        self.join_handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.join_handle.is_finished()
    }
}
