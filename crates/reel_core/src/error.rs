use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("step max must be a finite, non-negative number (got {0})")]
    InvalidStepMax(f64),
    #[error("progress must be a finite number in [0, 100] (got {0})")]
    InvalidProgress(f64),
    #[error("job {job_id}: status {status} does not match progress {progress}")]
    StatusMismatch {
        job_id: crate::JobId,
        status: crate::JobStatus,
        progress: f64,
    },
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
    #[error("unknown category filter: {0:?}")]
    UnknownFilter(String),
    #[error("unknown job status: {0:?}")]
    UnknownStatus(String),
    #[error("unknown quality: {0:?}")]
    UnknownQuality(String),
    #[error("invalid date {value:?}: {reason}")]
    InvalidDate { value: String, reason: String },
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },
}
