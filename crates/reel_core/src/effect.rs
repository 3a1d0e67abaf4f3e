#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A job reached 100% on this tick.
    JobCompleted { job_id: crate::JobId, filename: String },
    /// Picked files that are not accepted video formats.
    FilesRejected { names: Vec<String> },
    /// The last active job finished, failed or was removed.
    QueueSettled,
}
