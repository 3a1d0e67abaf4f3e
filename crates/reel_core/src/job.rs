use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CoreError, StageTable};

pub type JobId = u64;

/// Progress value at which a job counts as done.
pub const MAX_PROGRESS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Registered but not started. Only the upload queue uses it.
    Pending,
    Processing,
    Completed,
    /// Set from outside the simulator; never produced by a tick.
    Error,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Error => "error",
        }
    }

    /// Pending and processing jobs still have work ahead of them.
    pub fn is_active(self) -> bool {
        matches!(self, JobStatus::Pending | JobStatus::Processing)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(JobStatus::Pending),
            "processing" => Ok(JobStatus::Processing),
            "completed" => Ok(JobStatus::Completed),
            "error" => Ok(JobStatus::Error),
            _ => Err(CoreError::UnknownStatus(s.to_string())),
        }
    }
}

/// Raw description of a job to restore into a queue, validated on the way in.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSeed {
    pub filename: String,
    pub size_bytes: Option<u64>,
    pub status: JobStatus,
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    id: JobId,
    filename: String,
    size_bytes: Option<u64>,
    status: JobStatus,
    progress: f64,
    stage_label: &'static str,
    failure: Option<String>,
}

/// What a single advance did to a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Advance {
    Unchanged,
    Progressed,
    Completed,
}

impl Job {
    pub(crate) fn pending(
        id: JobId,
        filename: String,
        size_bytes: Option<u64>,
        stages: &StageTable,
    ) -> Self {
        Self {
            id,
            filename,
            size_bytes,
            status: JobStatus::Pending,
            progress: 0.0,
            stage_label: stages.label_for(0.0),
            failure: None,
        }
    }

    pub(crate) fn restore(id: JobId, seed: JobSeed, stages: &StageTable) -> Result<Self, CoreError> {
        let JobSeed {
            filename,
            size_bytes,
            status,
            progress,
        } = seed;
        if !progress.is_finite() || !(0.0..=MAX_PROGRESS).contains(&progress) {
            return Err(CoreError::InvalidProgress(progress));
        }
        let saturated = progress >= MAX_PROGRESS;
        if saturated != (status == JobStatus::Completed) {
            return Err(CoreError::StatusMismatch {
                job_id: id,
                status,
                progress,
            });
        }
        Ok(Self {
            id,
            filename,
            size_bytes,
            status,
            progress,
            stage_label: stages.label_for(progress),
            failure: None,
        })
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn size_bytes(&self) -> Option<u64> {
        self.size_bytes
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn stage_label(&self) -> &'static str {
        self.stage_label
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub(crate) fn is_ticking(&self) -> bool {
        self.status == JobStatus::Processing && self.progress < MAX_PROGRESS
    }

    pub(crate) fn start(&mut self) -> bool {
        if self.status != JobStatus::Pending {
            return false;
        }
        self.status = JobStatus::Processing;
        true
    }

    /// Adds `delta` to the progress of a processing job, saturating at 100.
    pub(crate) fn advance(&mut self, delta: f64, stages: &StageTable) -> Advance {
        if !self.is_ticking() || delta.is_nan() || delta <= 0.0 {
            return Advance::Unchanged;
        }
        self.progress = (self.progress + delta).min(MAX_PROGRESS);
        self.stage_label = stages.label_for(self.progress);
        if self.progress >= MAX_PROGRESS {
            self.status = JobStatus::Completed;
            Advance::Completed
        } else {
            Advance::Progressed
        }
    }

    pub(crate) fn fail(&mut self, reason: String) -> bool {
        if !self.status.is_active() {
            return false;
        }
        self.status = JobStatus::Error;
        self.failure = Some(reason);
        true
    }
}
