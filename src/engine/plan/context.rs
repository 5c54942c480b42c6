use std::sync::Arc;

use super::paths::{CubePaths, job_working_dir};
use super::request::{PlanMode, PlanRequest};
use crate::engine::errors::PlanError;
use crate::engine::metadata::{
    CubeDescriptor, CubeInstance, MetadataStore, Segment, SegmentStatus,
};

/// Validated, resolved input shared by every stage of plan compilation.
///
/// Holds read-only snapshots of the cube and segments as they were when the request was
/// resolved.
#[derive(Debug, Clone)]
pub struct PlanContext {
    mode: PlanMode,
    cube: Arc<CubeInstance>,
    segment: Segment,
    storage_table: String,
    job_id: String,
    working_root: String,
    paths: CubePaths,
    ancestors: Vec<Segment>,
}

impl PlanContext {
    pub fn resolve(request: &PlanRequest, store: &dyn MetadataStore) -> Result<Self, PlanError> {
        let target = request.target();
        require_non_empty("cube name", &target.cube_name)?;
        require_non_empty("job id", &target.job_id)?;
        require_non_empty("segment name", &target.segment_name)?;
        require_non_empty("working root", &target.working_root)?;

        let cube = store.cube(&target.cube_name)?;

        let segment = cube
            .segment(&target.segment_name, SegmentStatus::New)
            .cloned()
            .ok_or_else(|| {
                PlanError::invalid(format!(
                    "cube {} has no NEW segment named {}",
                    cube.name, target.segment_name
                ))
            })?;

        let storage_table = segment
            .storage_location_identifier()
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                PlanError::invalid(format!(
                    "segment {} has no storage location identifier",
                    segment.name
                ))
            })?;

        let ancestors = match request.mode() {
            PlanMode::Build => {
                check_dimensions(&cube.name, &cube.descriptor)?;
                Vec::new()
            }
            PlanMode::Merge => resolve_ancestors(&cube, &segment)?,
        };

        let job_dir = job_working_dir(&target.working_root, &target.job_id)?;
        let paths = CubePaths::new(&job_dir, &cube.name)?;

        tracing::debug!(
            target: "plan_context::resolve",
            mode = %request.mode(),
            cube = %cube.name,
            segment = %segment.name,
            job_id = %target.job_id,
            job_dir = %job_dir,
            ancestors = ancestors.len(),
            "Resolved plan context"
        );

        Ok(Self {
            mode: request.mode(),
            cube,
            segment,
            storage_table,
            job_id: target.job_id.clone(),
            working_root: target.working_root.clone(),
            paths,
            ancestors,
        })
    }

    pub fn mode(&self) -> PlanMode {
        self.mode
    }

    pub fn cube(&self) -> &CubeInstance {
        &self.cube
    }

    pub fn cube_name(&self) -> &str {
        &self.cube.name
    }

    pub fn descriptor(&self) -> &CubeDescriptor {
        &self.cube.descriptor
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    pub fn segment_name(&self) -> &str {
        &self.segment.name
    }

    /// Physical table the segment is loaded into.
    pub fn storage_table(&self) -> &str {
        &self.storage_table
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn working_root(&self) -> &str {
        &self.working_root
    }

    pub fn paths(&self) -> &CubePaths {
        &self.paths
    }

    /// Segments consumed by a merge, ordered by range start. Empty for builds.
    pub fn ancestors(&self) -> &[Segment] {
        &self.ancestors
    }
}

fn require_non_empty(what: &str, value: &str) -> Result<(), PlanError> {
    if value.trim().is_empty() {
        return Err(PlanError::invalid(format!("{what} is null or empty")));
    }
    Ok(())
}

fn check_dimensions(cube_name: &str, descriptor: &CubeDescriptor) -> Result<(), PlanError> {
    let total = descriptor.dimension_count();
    if total == 0 {
        return Err(PlanError::invalid(format!(
            "cube {cube_name} has no row key dimensions"
        )));
    }
    if descriptor.build_levels() > total {
        return Err(PlanError::invalid(format!(
            "cube {cube_name} asks for {} build levels over {total} dimensions",
            descriptor.build_levels()
        )));
    }
    Ok(())
}

fn resolve_ancestors(cube: &CubeInstance, target: &Segment) -> Result<Vec<Segment>, PlanError> {
    let ancestors: Vec<Segment> = cube
        .merging_segments(target)
        .into_iter()
        .cloned()
        .collect();

    if ancestors.len() < 2 {
        return Err(PlanError::invalid(format!(
            "merging segments count should be at least 2, cube {} has {} for {}",
            cube.name,
            ancestors.len(),
            target.name
        )));
    }

    if let Some(unbuilt) = ancestors.iter().find(|s| {
        s.last_build_job_id
            .as_deref()
            .is_none_or(|id| id.trim().is_empty())
    }) {
        return Err(PlanError::invalid(format!(
            "segment {} has no last build job to merge from",
            unbuilt.name
        )));
    }

    Ok(ancestors)
}
