use crate::engine::plan::{JobTarget, PlanRequest};

pub const DEFAULT_JOB_ID: &str = "4f1c2a9e-8d55-4e0b-9a41-7b3c6f2d1e08";
pub const DEFAULT_WORKING_ROOT: &str = "/cube/work";

/// Factory for creating `PlanRequest` values in tests.
pub struct PlanRequestFactory {
    merge: bool,
    target: JobTarget,
}

impl PlanRequestFactory {
    pub fn build() -> Self {
        Self {
            merge: false,
            target: default_target(),
        }
    }

    pub fn merge() -> Self {
        Self {
            merge: true,
            target: default_target(),
        }
    }

    pub fn with_cube(mut self, cube_name: &str) -> Self {
        self.target.cube_name = cube_name.to_string();
        self
    }

    pub fn with_segment(mut self, segment_name: &str) -> Self {
        self.target.segment_name = segment_name.to_string();
        self
    }

    pub fn with_job_id(mut self, job_id: &str) -> Self {
        self.target.job_id = job_id.to_string();
        self
    }

    pub fn with_working_root(mut self, root: &str) -> Self {
        self.target.working_root = root.to_string();
        self
    }

    pub fn create(self) -> PlanRequest {
        if self.merge {
            PlanRequest::Merge(self.target)
        } else {
            PlanRequest::Build(self.target)
        }
    }
}

fn default_target() -> JobTarget {
    JobTarget {
        cube_name: "sales".to_string(),
        segment_name: "seg1".to_string(),
        job_id: DEFAULT_JOB_ID.to_string(),
        working_root: DEFAULT_WORKING_ROOT.to_string(),
    }
}
