use serde::Serialize;

use super::paths::CubePaths;
use crate::engine::errors::PlanError;
use crate::engine::metadata::Segment;

/// One materialized level of the cuboid lattice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagePath {
    pub index: usize,
    /// Row-key columns kept by the cuboids of this stage
    pub dimensions: usize,
    pub path: String,
}

impl StagePath {
    pub fn is_base(&self) -> bool {
        self.index == 0
    }
}

/// Stage topology of a build: the base cuboid followed by `build_levels` reduction stages,
/// each dropping one dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuboidLattice {
    total_dimensions: usize,
    stages: Vec<StagePath>,
}

impl CuboidLattice {
    pub fn plan(
        paths: &CubePaths,
        total_dimensions: usize,
        build_levels: usize,
    ) -> Result<Self, PlanError> {
        if total_dimensions == 0 {
            return Err(PlanError::invalid(format!(
                "cube {} has no row key dimensions",
                paths.cube_name()
            )));
        }
        if build_levels > total_dimensions {
            return Err(PlanError::invalid(format!(
                "build levels {build_levels} exceed {total_dimensions} row key dimensions"
            )));
        }

        let stages = (0..=build_levels)
            .map(|index| {
                let dimensions = total_dimensions - index;
                StagePath {
                    index,
                    dimensions,
                    path: paths.cuboid_output(dimensions, total_dimensions),
                }
            })
            .collect();

        Ok(Self {
            total_dimensions,
            stages,
        })
    }

    pub fn total_dimensions(&self) -> usize {
        self.total_dimensions
    }

    pub fn stages(&self) -> &[StagePath] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn base(&self) -> &StagePath {
        &self.stages[0]
    }

    /// `(input, output)` stage pairs of the reduction steps, in build order.
    pub fn transitions(&self) -> impl Iterator<Item = (&StagePath, &StagePath)> {
        self.stages.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

/// Cuboid outputs of the segments consumed by a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeInputs {
    sources: Vec<String>,
}

impl MergeInputs {
    pub const MIN_ANCESTORS: usize = 2;

    pub fn from_ancestors(
        root: &str,
        cube_name: &str,
        ancestors: &[Segment],
    ) -> Result<Self, PlanError> {
        if ancestors.len() < Self::MIN_ANCESTORS {
            return Err(PlanError::invalid(format!(
                "merging needs at least {} segments, found {}",
                Self::MIN_ANCESTORS,
                ancestors.len()
            )));
        }

        let sources = ancestors
            .iter()
            .map(|segment| {
                let job_id = segment.last_build_job_id.as_deref().ok_or_else(|| {
                    PlanError::invalid(format!(
                        "segment {} has no completed build to merge",
                        segment.name
                    ))
                })?;
                Ok(CubePaths::for_job(root, job_id, cube_name)?.cuboid_glob())
            })
            .collect::<Result<Vec<_>, PlanError>>()?;

        Ok(Self { sources })
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Comma separated input list handed to the merge job.
    pub fn expression(&self) -> String {
        self.sources.join(",")
    }
}
