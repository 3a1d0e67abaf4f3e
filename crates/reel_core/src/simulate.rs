use rand::Rng;

use crate::job::Advance;
use crate::{CoreError, Job, JobId, StageTable};

/// Largest per-tick increment for the multi-job processing queue.
pub const PROCESSING_STEP_MAX: f64 = 5.0;
/// Largest per-tick increment for single-file upload progress.
pub const UPLOAD_STEP_MAX: f64 = 15.0;

/// How far a tick may push a job and how progress is labelled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationProfile {
    step_max: f64,
    stages: StageTable,
}

impl SimulationProfile {
    pub fn new(step_max: f64, stages: StageTable) -> Result<Self, CoreError> {
        if !step_max.is_finite() || step_max < 0.0 {
            return Err(CoreError::InvalidStepMax(step_max));
        }
        Ok(Self { step_max, stages })
    }

    pub fn processing() -> Self {
        Self {
            step_max: PROCESSING_STEP_MAX,
            stages: StageTable::PROCESSING,
        }
    }

    pub fn upload() -> Self {
        Self {
            step_max: UPLOAD_STEP_MAX,
            stages: StageTable::UPLOAD,
        }
    }

    pub fn step_max(&self) -> f64 {
        self.step_max
    }

    pub fn stages(&self) -> &StageTable {
        &self.stages
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.step_max == 0.0 {
            0.0
        } else {
            rng.random_range(0.0..=self.step_max)
        }
    }
}

impl Default for SimulationProfile {
    fn default() -> Self {
        Self::processing()
    }
}

/// Advances every processing job by a uniform draw in `[0, step_max]`.
///
/// Returns the ids of jobs that reached 100 on this tick, in iteration order,
/// and whether any job changed at all.
pub fn tick<'a, R, I>(jobs: I, profile: &SimulationProfile, rng: &mut R) -> (Vec<JobId>, bool)
where
    R: Rng,
    I: IntoIterator<Item = &'a mut Job>,
{
    let mut completed = Vec::new();
    let mut changed = false;
    for job in jobs {
        if !job.is_ticking() {
            continue;
        }
        match job.advance(profile.draw(rng), &profile.stages) {
            Advance::Unchanged => {}
            Advance::Progressed => changed = true,
            Advance::Completed => {
                changed = true;
                completed.push(job.id());
            }
        }
    }
    (completed, changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_non_finite_step() {
        assert_eq!(
            SimulationProfile::new(-1.0, StageTable::PROCESSING),
            Err(CoreError::InvalidStepMax(-1.0))
        );
        assert!(SimulationProfile::new(f64::INFINITY, StageTable::UPLOAD).is_err());
        assert!(SimulationProfile::new(0.0, StageTable::UPLOAD).is_ok());
    }

    #[test]
    fn presets_match_queue_kinds() {
        assert_eq!(SimulationProfile::processing().step_max(), 5.0);
        assert_eq!(SimulationProfile::upload().step_max(), 15.0);
        assert_eq!(SimulationProfile::upload().stages().terminal(), "Uploaded");
    }
}
