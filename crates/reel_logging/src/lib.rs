#![deny(missing_docs)]
//! Shared logging utilities for the highlight reel workspace.
//!
//! Provides the `reel_*` macros used across the crates. Every line they emit
//! is prefixed with the simulation tick of the calling thread, so log output
//! from a running queue can be lined up with the snapshots it produced.

use std::cell::Cell;

#[doc(hidden)]
pub use log;

thread_local! {
    /// Tick count of the simulation loop running on this thread.
    static SIM_TICK: Cell<u64> = const { Cell::new(0) };
}

/// Sets the simulation tick count for the current thread.
/// The simulation loop calls this once per tick.
pub fn set_sim_tick(tick: u64) {
    SIM_TICK.with(|v| v.set(tick));
}

/// Retrieves the simulation tick count for the current thread.
/// Returns 0 on threads that never ran a simulation loop.
pub fn sim_tick() -> u64 {
    SIM_TICK.with(|v| v.get())
}

/// Logs a trace-level message stamped with the current tick.
#[macro_export]
macro_rules! reel_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!("[t{}] {}", $crate::sim_tick(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message stamped with the current tick.
#[macro_export]
macro_rules! reel_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!("[t{}] {}", $crate::sim_tick(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message stamped with the current tick.
#[macro_export]
macro_rules! reel_info {
    ($($arg:tt)*) => {{
        $crate::log::info!("[t{}] {}", $crate::sim_tick(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message stamped with the current tick.
#[macro_export]
macro_rules! reel_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!("[t{}] {}", $crate::sim_tick(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message stamped with the current tick.
#[macro_export]
macro_rules! reel_error {
    ($($arg:tt)*) => {{
        $crate::log::error!("[t{}] {}", $crate::sim_tick(), format_args!($($arg)*));
    }};
}

/// Initializes a terminal logger for tests.
///
/// Safe to call from every test: later calls no-op once a logger is set.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_is_per_thread() {
        set_sim_tick(7);
        assert_eq!(sim_tick(), 7);
        let other = std::thread::spawn(sim_tick).join().unwrap();
        assert_eq!(other, 0);
    }
}
