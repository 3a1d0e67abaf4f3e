use serde::Serialize;

use crate::{JobId, JobStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct IntakeStats {
    pub accepted: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub error: usize,
}

impl StatusCounts {
    pub fn active(&self) -> usize {
        self.pending + self.processing
    }
}

/// Snapshot of one queue, emitted after every change.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct QueueViewModel {
    pub jobs: Vec<JobRowView>,
    pub counts: StatusCounts,
    pub last_intake: Option<IntakeStats>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRowView {
    pub job_id: JobId,
    pub filename: String,
    pub status: JobStatus,
    pub progress: f64,
    pub stage: &'static str,
    pub size_label: Option<String>,
    pub failure: Option<String>,
}
