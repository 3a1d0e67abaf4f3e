use std::time::Duration;

use reel_core::{IncomingFile, JobId, QueueViewModel, SimulationSettings};
use thiserror::Error;

/// Timer configuration for one running queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSettings {
    pub period: Duration,
    /// Exit the loop once the queue has no pending or processing jobs left.
    pub stop_when_settled: bool,
    /// Fixed seed for the per-tick draws; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl TickSettings {
    pub fn processing(settings: &SimulationSettings) -> Self {
        Self {
            period: Duration::from_millis(settings.processing_tick_ms),
            stop_when_settled: false,
            seed: settings.seed,
        }
    }

    pub fn upload(settings: &SimulationSettings) -> Self {
        Self {
            period: Duration::from_millis(settings.upload_tick_ms),
            stop_when_settled: true,
            seed: settings.seed,
        }
    }
}

/// Requests applied between ticks, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimCommand {
    AddFiles(Vec<IncomingFile>),
    Fail { job_id: JobId, reason: String },
    Remove { job_id: JobId },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// Queue contents after every tick and after commands that change it;
    /// `tick` is 0 before the first tick.
    Snapshot { tick: u64, view: QueueViewModel },
    JobCompleted { job_id: JobId, filename: String },
    FilesRejected { names: Vec<String> },
    Settled,
    Stopped { ticks: u64 },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to build simulation runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to spawn simulation thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("simulation has stopped; command was not delivered")]
    Stopped,
}
