use std::collections::BTreeMap;

use rand::Rng;

use crate::simulate::tick;
use crate::view_model::{IntakeStats, JobRowView, QueueViewModel, StatusCounts};
use crate::{
    format_file_size, CoreError, IncomingFile, Job, JobId, JobSeed, JobStatus, SimulationProfile,
};

/// Owned state of one queue view: its jobs, its profile and a render flag.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueState {
    profile: SimulationProfile,
    jobs: BTreeMap<JobId, Job>,
    next_job_id: JobId,
    last_intake: Option<IntakeStats>,
    dirty: bool,
}

impl Default for QueueState {
    fn default() -> Self {
        Self::new(SimulationProfile::default())
    }
}

impl QueueState {
    pub fn new(profile: SimulationProfile) -> Self {
        Self {
            profile,
            jobs: BTreeMap::new(),
            next_job_id: 1,
            last_intake: None,
            dirty: false,
        }
    }

    /// Builds a queue from previously known jobs, validating each one.
    pub fn from_jobs(
        profile: SimulationProfile,
        seeds: impl IntoIterator<Item = JobSeed>,
    ) -> Result<Self, CoreError> {
        let mut state = Self::new(profile);
        for seed in seeds {
            let id = state.allocate_id();
            let job = Job::restore(id, seed, profile.stages())?;
            state.jobs.insert(id, job);
        }
        state.mark_dirty();
        Ok(state)
    }

    pub fn profile(&self) -> &SimulationProfile {
        &self.profile
    }

    pub fn job(&self, job_id: JobId) -> Option<&Job> {
        self.jobs.get(&job_id)
    }

    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }

    pub fn has_active(&self) -> bool {
        self.jobs.values().any(|job| job.status().is_active())
    }

    pub fn view(&self) -> QueueViewModel {
        let mut counts = StatusCounts::default();
        let jobs = self
            .jobs
            .values()
            .map(|job| {
                match job.status() {
                    JobStatus::Pending => counts.pending += 1,
                    JobStatus::Processing => counts.processing += 1,
                    JobStatus::Completed => counts.completed += 1,
                    JobStatus::Error => counts.error += 1,
                }
                JobRowView {
                    job_id: job.id(),
                    filename: job.filename().to_string(),
                    status: job.status(),
                    progress: job.progress(),
                    stage: job.stage_label(),
                    size_label: job.size_bytes().map(format_file_size),
                    failure: job.failure().map(ToOwned::to_owned),
                }
            })
            .collect();

        QueueViewModel {
            jobs,
            counts,
            last_intake: self.last_intake,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn allocate_id(&mut self) -> JobId {
        let id = self.next_job_id;
        self.next_job_id += 1;
        id
    }

    pub(crate) fn set_last_intake(&mut self, accepted: usize, rejected: usize) {
        self.last_intake = Some(IntakeStats { accepted, rejected });
        self.mark_dirty();
    }

    pub(crate) fn push_pending(&mut self, file: IncomingFile) -> JobId {
        let id = self.allocate_id();
        let job = Job::pending(id, file.name, file.size_bytes, self.profile.stages());
        self.jobs.insert(id, job);
        self.mark_dirty();
        id
    }

    pub(crate) fn start_pending(&mut self) -> usize {
        let started = self.jobs.values_mut().map(Job::start).filter(|&s| s).count();
        if started > 0 {
            self.mark_dirty();
        }
        started
    }

    /// Runs one simulation tick and returns `(id, filename)` of jobs that completed.
    pub(crate) fn advance_all<R: Rng>(&mut self, rng: &mut R) -> Vec<(JobId, String)> {
        let (completed, changed) = tick(self.jobs.values_mut(), &self.profile, rng);
        if changed {
            self.mark_dirty();
        }
        completed
            .into_iter()
            .filter_map(|id| {
                self.jobs
                    .get(&id)
                    .map(|job| (id, job.filename().to_string()))
            })
            .collect()
    }

    pub(crate) fn fail(&mut self, job_id: JobId, reason: String) -> bool {
        let failed = self
            .jobs
            .get_mut(&job_id)
            .is_some_and(|job| job.fail(reason));
        if failed {
            self.mark_dirty();
        }
        failed
    }

    pub(crate) fn remove(&mut self, job_id: JobId) -> bool {
        let removed = self.jobs.remove(&job_id).is_some();
        if removed {
            self.mark_dirty();
        }
        removed
    }
}

/// The three jobs shown on the processing page before any upload.
pub fn seed_processing_jobs() -> Vec<JobSeed> {
    [
        ("ML_Epic_Game_2024.mp4", JobStatus::Processing, 67.0),
        ("Mobile_Legends_Ranked.mp4", JobStatus::Completed, 100.0),
        ("ML_Highlights_Match.mp4", JobStatus::Processing, 23.0),
    ]
    .into_iter()
    .map(|(filename, status, progress)| JobSeed {
        filename: filename.to_string(),
        size_bytes: None,
        status,
        progress,
    })
    .collect()
}
