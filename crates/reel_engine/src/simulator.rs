use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reel_core::{update, Effect, Msg, QueueState};
use reel_logging::{reel_debug, reel_info, set_sim_tick};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::{SimCommand, SimEvent, TickSettings};

/// Drives `state` on a fixed interval until cancelled or, if configured, settled.
///
/// Ticks and commands are handled one at a time by this task, so each tick's
/// snapshot is sent before the next tick can start. The first tick fires one
/// full period after the call. Returns the final state.
pub async fn run_simulation(
    state: QueueState,
    settings: TickSettings,
    mut commands: UnboundedReceiver<SimCommand>,
    events: UnboundedSender<SimEvent>,
    cancel: CancellationToken,
) -> QueueState {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut interval = time::interval_at(Instant::now() + settings.period, settings.period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut ticks = 0u64;
    let mut state = publish(state, Vec::new(), ticks, Snapshot::IfChanged, &events);
    reel_info!(
        "Simulation started: period={:?} stop_when_settled={}",
        settings.period,
        settings.stop_when_settled
    );

    loop {
        let settled = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                reel_debug!("Simulation cancelled");
                break;
            }
            Some(command) = commands.recv() => {
                let (next, settled) = apply_command(state, command, ticks, &events);
                state = next;
                settled
            }
            _ = interval.tick() => {
                ticks += 1;
                set_sim_tick(ticks);
                let (next, effects) = update(state, Msg::Tick { seed: rng.random() });
                let settled = effects.contains(&Effect::QueueSettled);
                state = publish(next, effects, ticks, Snapshot::Always, &events);
                settled
            }
        };

        if settled && settings.stop_when_settled {
            break;
        }
    }

    reel_info!("Simulation stopped after {} tick(s)", ticks);
    let _ = events.send(SimEvent::Stopped { ticks });
    state
}

fn apply_command(
    state: QueueState,
    command: SimCommand,
    tick: u64,
    events: &UnboundedSender<SimEvent>,
) -> (QueueState, bool) {
    let mut effects = Vec::new();
    let mut idle_after_intake = false;
    let state = match command {
        SimCommand::AddFiles(files) => {
            let (state, added) = update(state, Msg::FilesAdded(files));
            effects.extend(added);
            let (state, started) = update(state, Msg::StartPending);
            effects.extend(started);
            // An intake that queued nothing never goes active, so no settle effect follows.
            idle_after_intake = !state.has_active();
            state
        }
        SimCommand::Fail { job_id, reason } => {
            let (state, failed) = update(state, Msg::JobFailed { job_id, reason });
            effects.extend(failed);
            state
        }
        SimCommand::Remove { job_id } => {
            let (state, removed) = update(state, Msg::JobRemoved { job_id });
            effects.extend(removed);
            state
        }
    };
    let settled = idle_after_intake || effects.contains(&Effect::QueueSettled);
    (
        publish(state, effects, tick, Snapshot::IfChanged, events),
        settled,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Snapshot {
    /// Every tick reports the queue, even when nothing moved.
    Always,
    IfChanged,
}

/// Sends a snapshot as requested, then one event per effect.
fn publish(
    mut state: QueueState,
    effects: Vec<Effect>,
    tick: u64,
    snapshot: Snapshot,
    events: &UnboundedSender<SimEvent>,
) -> QueueState {
    let view = state.view();
    let changed = state.consume_dirty();
    if changed || snapshot == Snapshot::Always {
        let _ = events.send(SimEvent::Snapshot { tick, view });
    }
    for effect in effects {
        let event = match effect {
            Effect::JobCompleted { job_id, filename } => SimEvent::JobCompleted { job_id, filename },
            Effect::FilesRejected { names } => SimEvent::FilesRejected { names },
            Effect::QueueSettled => SimEvent::Settled,
        };
        let _ = events.send(event);
    }
    state
}
