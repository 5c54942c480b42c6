use serde::Serialize;

use super::request::PlanMode;
use super::step::Step;

/// Ordered steps of one build or merge job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    mode: PlanMode,
    job_id: String,
    working_dir: String,
    steps: Vec<Step>,
}

impl Plan {
    pub fn mode(&self) -> PlanMode {
        self.mode
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    /// Job working directory every intermediate path lives under.
    pub fn working_dir(&self) -> &str {
        &self.working_dir
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, sequence: usize) -> Option<&Step> {
        self.steps.get(sequence)
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

/// Accumulates steps and hands out their sequence numbers, so indices are contiguous
/// from zero by construction. Only [`PlanBuilder::finish`] exposes the result.
pub(crate) struct PlanBuilder {
    mode: PlanMode,
    job_id: String,
    working_dir: String,
    steps: Vec<Step>,
}

impl PlanBuilder {
    pub(crate) fn new(mode: PlanMode, job_id: &str, working_dir: &str) -> Self {
        Self {
            mode,
            job_id: job_id.to_string(),
            working_dir: working_dir.to_string(),
            steps: Vec::new(),
        }
    }

    /// Appends the step produced for the next sequence number.
    pub(crate) fn push_with(&mut self, make: impl FnOnce(usize) -> Step) -> &mut Self {
        let sequence = self.steps.len();
        let step = make(sequence);
        debug_assert_eq!(step.sequence, sequence);
        self.steps.push(step);
        self
    }

    pub(crate) fn finish(self) -> Plan {
        Plan {
            mode: self.mode,
            job_id: self.job_id,
            working_dir: self.working_dir,
            steps: self.steps,
        }
    }
}
