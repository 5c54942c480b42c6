use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Cube, segment and job a plan is compiled for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTarget {
    pub cube_name: String,
    /// Segment being built, or the segment a merge produces
    pub segment_name: String,
    /// Correlation id of the job; names its working directory
    pub job_id: String,
    pub working_root: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PlanRequest {
    /// Build a NEW segment from raw source data
    Build(JobTarget),
    /// Merge the built segments covered by a NEW segment into it
    Merge(JobTarget),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanMode {
    Build,
    Merge,
}

impl PlanMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanMode::Build => "build",
            PlanMode::Merge => "merge",
        }
    }
}

impl Display for PlanMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PlanRequest {
    pub fn build(cube_name: &str, segment_name: &str, job_id: &str, working_root: &str) -> Self {
        PlanRequest::Build(JobTarget {
            cube_name: cube_name.to_string(),
            segment_name: segment_name.to_string(),
            job_id: job_id.to_string(),
            working_root: working_root.to_string(),
        })
    }

    pub fn merge(cube_name: &str, segment_name: &str, job_id: &str, working_root: &str) -> Self {
        PlanRequest::Merge(JobTarget {
            cube_name: cube_name.to_string(),
            segment_name: segment_name.to_string(),
            job_id: job_id.to_string(),
            working_root: working_root.to_string(),
        })
    }

    pub fn target(&self) -> &JobTarget {
        match self {
            PlanRequest::Build(target) | PlanRequest::Merge(target) => target,
        }
    }

    pub fn mode(&self) -> PlanMode {
        match self {
            PlanRequest::Build(_) => PlanMode::Build,
            PlanRequest::Merge(_) => PlanMode::Merge,
        }
    }
}
