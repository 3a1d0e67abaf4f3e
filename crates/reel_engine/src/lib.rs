//! Highlight reel engine: timer-driven simulation of job queues.
mod handle;
mod simulator;
mod types;

pub use handle::SimulatorHandle;
pub use simulator::run_simulation;
pub use types::{EngineError, SimCommand, SimEvent, TickSettings};
