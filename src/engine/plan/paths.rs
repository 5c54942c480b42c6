//! Canonical intermediate storage paths for a plan.
//!
//! Every path a step reads or writes is derived here from the working root, the job id
//! and the cube name. Nothing else in the planner concatenates paths.
//!
//! ```text
//! {root}/job-{job_id}/
//! ├── {flat_table_name}/            flattened source rows
//! └── {cube}/
//!     ├── fact_distinct_columns/
//!     ├── cuboid/
//!     │   ├── base_cuboid/
//!     │   ├── {D-1}d_cuboid/
//!     │   └── ...
//!     ├── merged_cuboid/
//!     ├── rowkey_stats/part-r-00000
//!     └── hfile/
//! ```

use crate::engine::errors::PlanError;

pub const JOB_DIR_PREFIX: &str = "job-";
pub const CUBOID_DIR: &str = "cuboid";
pub const BASE_CUBOID_TAG: &str = "base_cuboid";
pub const FACT_DISTINCT_COLUMNS_TAG: &str = "fact_distinct_columns";
pub const ROWKEY_STATS_TAG: &str = "rowkey_stats";
pub const ROWKEY_STATS_PARTITION: &str = "part-r-00000";
pub const MERGED_CUBOID_TAG: &str = "merged_cuboid";
pub const HFILE_TAG: &str = "hfile";

/// Working directory of one job: `{root}/job-{job_id}`.
pub fn job_working_dir(root: &str, job_id: &str) -> Result<String, PlanError> {
    require("working root", root)?;
    require("job id", job_id)?;
    Ok(format!(
        "{}/{}{}",
        root.trim_end_matches('/'),
        JOB_DIR_PREFIX,
        job_id
    ))
}

/// Tag of the cuboid holding `dimensions` of `total` row-key columns.
pub fn cuboid_tag(dimensions: usize, total: usize) -> String {
    if dimensions == total {
        BASE_CUBOID_TAG.to_string()
    } else {
        format!("{dimensions}d_cuboid")
    }
}

/// Table name used for the flattened copy of a segment's source rows.
pub fn flat_table_name(
    prefix: &str,
    cube_name: &str,
    segment_name: &str,
    job_id: &str,
) -> Result<String, PlanError> {
    require("flat table prefix", prefix)?;
    require("cube name", cube_name)?;
    require("segment name", segment_name)?;
    require("job id", job_id)?;
    Ok(format!("{prefix}_{cube_name}_{segment_name}_{job_id}")
        .replace('-', "_")
        .to_ascii_lowercase())
}

/// Path family of one cube inside one job working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubePaths {
    job_dir: String,
    cube_name: String,
}

impl CubePaths {
    pub fn new(job_dir: &str, cube_name: &str) -> Result<Self, PlanError> {
        require("job working dir", job_dir)?;
        require("cube name", cube_name)?;
        Ok(Self {
            job_dir: job_dir.trim_end_matches('/').to_string(),
            cube_name: cube_name.to_string(),
        })
    }

    /// Paths of a job identified by `job_id` under `root`.
    pub fn for_job(root: &str, job_id: &str, cube_name: &str) -> Result<Self, PlanError> {
        Self::new(&job_working_dir(root, job_id)?, cube_name)
    }

    pub fn job_dir(&self) -> &str {
        &self.job_dir
    }

    pub fn cube_name(&self) -> &str {
        &self.cube_name
    }

    pub fn cube_dir(&self) -> String {
        format!("{}/{}", self.job_dir, self.cube_name)
    }

    /// `{job_dir}/{cube}/{tag}`
    pub fn tagged(&self, tag: &str) -> String {
        format!("{}/{}", self.cube_dir(), tag)
    }

    pub fn cuboid_dir(&self, tag: &str) -> String {
        format!("{}/{}/{}", self.cube_dir(), CUBOID_DIR, tag)
    }

    pub fn cuboid_output(&self, dimensions: usize, total: usize) -> String {
        self.cuboid_dir(&cuboid_tag(dimensions, total))
    }

    /// Every cuboid output of the job, wildcarded.
    pub fn cuboid_glob(&self) -> String {
        self.cuboid_dir("*")
    }

    pub fn fact_distinct_columns(&self) -> String {
        self.tagged(FACT_DISTINCT_COLUMNS_TAG)
    }

    pub fn rowkey_stats(&self) -> String {
        self.tagged(ROWKEY_STATS_TAG)
    }

    /// Single reducer output holding the sampled key-range splits.
    pub fn rowkey_stats_partition(&self) -> String {
        format!("{}/{}", self.rowkey_stats(), ROWKEY_STATS_PARTITION)
    }

    pub fn merged_cuboid(&self) -> String {
        self.tagged(MERGED_CUBOID_TAG)
    }

    pub fn hfile(&self) -> String {
        self.tagged(HFILE_TAG)
    }

    pub fn flat_table_dir(&self, table_name: &str) -> String {
        format!("{}/{}", self.job_dir, table_name)
    }
}

fn require(what: &str, value: &str) -> Result<(), PlanError> {
    if value.trim().is_empty() {
        return Err(PlanError::invalid(format!("{what} is empty")));
    }
    Ok(())
}
