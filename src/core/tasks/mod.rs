mod handle;
mod manager;

pub use handle::SubmissionHandle;
pub use manager::{
    SubmissionResult,
    SubmissionTasks,
};
