use rand::rngs::StdRng;
use rand::SeedableRng;
use reel_logging::{reel_debug, reel_info, reel_warn};

use crate::{is_accepted_video, Effect, IncomingFile, Msg, QueueState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: QueueState, msg: Msg) -> (QueueState, Vec<Effect>) {
    let was_active = state.has_active();

    let mut effects = match msg {
        Msg::FilesAdded(files) => {
            let (accepted, rejected): (Vec<IncomingFile>, Vec<IncomingFile>) = files
                .into_iter()
                .partition(|file| is_accepted_video(&file.name));
            if accepted.is_empty() && rejected.is_empty() {
                return (state, Vec::new());
            }
            state.set_last_intake(accepted.len(), rejected.len());
            for file in accepted {
                let job_id = state.push_pending(file);
                reel_debug!("Queued job {}", job_id);
            }
            if rejected.is_empty() {
                Vec::new()
            } else {
                let names: Vec<String> = rejected.into_iter().map(|file| file.name).collect();
                reel_warn!("Rejected {} non-video file(s): {:?}", names.len(), names);
                vec![Effect::FilesRejected { names }]
            }
        }
        Msg::StartPending => {
            let started = state.start_pending();
            if started > 0 {
                reel_debug!("Started {} pending job(s)", started);
            }
            Vec::new()
        }
        Msg::Tick { seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            state
                .advance_all(&mut rng)
                .into_iter()
                .map(|(job_id, filename)| {
                    reel_info!("Job {} completed: {}", job_id, filename);
                    Effect::JobCompleted { job_id, filename }
                })
                .collect()
        }
        Msg::JobFailed { job_id, reason } => {
            if state.fail(job_id, reason.clone()) {
                reel_warn!("Job {} failed: {}", job_id, reason);
            }
            Vec::new()
        }
        Msg::JobRemoved { job_id } => {
            if state.remove(job_id) {
                reel_debug!("Removed job {}", job_id);
            }
            Vec::new()
        }
    };

    if was_active && !state.has_active() {
        effects.push(Effect::QueueSettled);
    }

    (state, effects)
}
