use std::thread::{self, JoinHandle};

use reel_core::{IncomingFile, JobId, QueueState};
use reel_logging::{reel_debug, reel_warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use crate::{run_simulation, EngineError, SimCommand, SimEvent, TickSettings};

/// Owns one running queue simulation on a dedicated thread.
///
/// The timer is tied to the handle: `stop` or dropping the handle cancels it
/// and waits for the worker to exit.
pub struct SimulatorHandle {
    cmd_tx: UnboundedSender<SimCommand>,
    event_rx: UnboundedReceiver<SimEvent>,
    cancel: CancellationToken,
    worker: Option<JoinHandle<()>>,
}

impl SimulatorHandle {
    pub fn spawn(state: QueueState, settings: TickSettings) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(EngineError::Runtime)?;
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let worker = thread::Builder::new()
            .name("reel-simulator".to_string())
            .spawn(move || {
                runtime.block_on(run_simulation(state, settings, cmd_rx, event_tx, token));
            })
            .map_err(EngineError::Spawn)?;

        Ok(Self {
            cmd_tx,
            event_rx,
            cancel,
            worker: Some(worker),
        })
    }

    pub fn add_files(&self, files: Vec<IncomingFile>) -> Result<(), EngineError> {
        self.send(SimCommand::AddFiles(files))
    }

    /// Marks a job as failed; the simulator itself never does this.
    pub fn fail(&self, job_id: JobId, reason: impl Into<String>) -> Result<(), EngineError> {
        self.send(SimCommand::Fail {
            job_id,
            reason: reason.into(),
        })
    }

    pub fn remove(&self, job_id: JobId) -> Result<(), EngineError> {
        self.send(SimCommand::Remove { job_id })
    }

    fn send(&self, command: SimCommand) -> Result<(), EngineError> {
        self.cmd_tx.send(command).map_err(|err| {
            reel_warn!("Dropped command for stopped simulator: {:?}", err.0);
            EngineError::Stopped
        })
    }

    pub fn try_recv(&mut self) -> Option<SimEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; `None` once the worker is gone.
    /// Must not be called from inside an async runtime.
    pub fn blocking_recv(&mut self) -> Option<SimEvent> {
        self.event_rx.blocking_recv()
    }

    pub fn stop(&mut self) {
        self.cancel.cancel();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
            reel_debug!("Simulator thread joined");
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|worker| !worker.is_finished())
    }
}

impl Drop for SimulatorHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
