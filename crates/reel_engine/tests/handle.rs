use std::time::Duration;

use reel_core::{seed_processing_jobs, IncomingFile, QueueState, SimulationProfile};
use reel_engine::{EngineError, SimEvent, SimulatorHandle, TickSettings};

fn fast(stop_when_settled: bool) -> TickSettings {
    TickSettings {
        period: Duration::from_millis(5),
        stop_when_settled,
        seed: Some(3),
    }
}

#[test]
fn upload_runs_to_completion_on_worker_thread() {
    reel_logging::initialize_for_tests();
    let mut handle =
        SimulatorHandle::spawn(QueueState::new(SimulationProfile::upload()), fast(true)).unwrap();
    handle
        .add_files(vec![IncomingFile::new("clip.mov", Some(4096))])
        .unwrap();

    let mut completed = Vec::new();
    let mut stopped = false;
    while let Some(event) = handle.blocking_recv() {
        match event {
            SimEvent::JobCompleted { filename, .. } => completed.push(filename),
            SimEvent::Stopped { .. } => {
                stopped = true;
                break;
            }
            _ => {}
        }
    }

    assert!(stopped);
    assert_eq!(completed, vec!["clip.mov".to_string()]);
    handle.stop();
    assert!(!handle.is_running());
}

#[test]
fn dropping_the_handle_cancels_the_timer() {
    let state =
        QueueState::from_jobs(SimulationProfile::processing(), seed_processing_jobs()).unwrap();
    let mut handle = SimulatorHandle::spawn(state, fast(false)).unwrap();
    assert!(matches!(handle.blocking_recv(), Some(SimEvent::Snapshot { tick: 0, .. })));
    assert!(handle.is_running());
    drop(handle);
}

#[test]
fn stop_emits_stopped_event() {
    let mut handle =
        SimulatorHandle::spawn(QueueState::new(SimulationProfile::upload()), fast(false)).unwrap();
    handle.stop();

    let mut last = None;
    while let Some(event) = handle.try_recv() {
        last = Some(event);
    }
    assert!(matches!(last, Some(SimEvent::Stopped { .. })));
}

#[test]
fn commands_after_stop_are_reported() {
    let mut handle =
        SimulatorHandle::spawn(QueueState::new(SimulationProfile::upload()), fast(false)).unwrap();
    handle.stop();

    assert!(matches!(
        handle.add_files(vec![IncomingFile::new("late.mp4", None)]),
        Err(EngineError::Stopped)
    ));
    assert!(matches!(handle.fail(1, "gone"), Err(EngineError::Stopped)));
    assert!(matches!(handle.remove(1), Err(EngineError::Stopped)));
}
