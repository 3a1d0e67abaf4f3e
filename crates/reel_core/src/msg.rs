#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Files picked for upload; accepted ones become pending jobs.
    FilesAdded(Vec<crate::IncomingFile>),
    /// Move every pending job into processing.
    StartPending,
    /// Timer tick. Increments are drawn from an RNG seeded with `seed`.
    Tick { seed: u64 },
    /// Failure reported from outside the simulator.
    JobFailed { job_id: crate::JobId, reason: String },
    /// User removed a job from the visible list.
    JobRemoved { job_id: crate::JobId },
}
