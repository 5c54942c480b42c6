use super::context::PlanContext;
use super::job_plan::{Plan, PlanBuilder};
use super::lattice::MergeInputs;
use super::step_builder::StepBuilder;
use crate::engine::errors::PlanError;
use crate::shared::config::EngineConfig;

/// Sequences the steps that fold built segments into one merged segment.
pub struct MergePlanAssembler<'a> {
    ctx: &'a PlanContext,
    config: &'a EngineConfig,
}

impl<'a> MergePlanAssembler<'a> {
    pub fn new(ctx: &'a PlanContext, config: &'a EngineConfig) -> Self {
        Self { ctx, config }
    }

    pub fn assemble(&self) -> Result<Plan, PlanError> {
        let inputs = MergeInputs::from_ancestors(
            self.ctx.working_root(),
            self.ctx.cube_name(),
            self.ctx.ancestors(),
        )?;
        let merged = self.ctx.paths().merged_cuboid();

        let steps = StepBuilder::new(self.ctx, self.config);
        let mut plan = PlanBuilder::new(
            self.ctx.mode(),
            self.ctx.job_id(),
            self.ctx.paths().job_dir(),
        );
        plan.push_with(|seq| steps.merge_cuboid(seq, &inputs))
            .push_with(|seq| steps.range_key_distribution(seq, &merged))
            .push_with(|seq| steps.create_storage_table(seq))
            .push_with(|seq| steps.convert_to_hfile(seq, &merged))
            .push_with(|seq| steps.bulk_load(seq));

        tracing::info!(
            target: "merge_plan::assemble",
            cube = %self.ctx.cube_name(),
            segment = %self.ctx.segment_name(),
            ancestors = ?self.ctx.ancestors().iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            "Assembled merge plan"
        );

        Ok(plan.finish())
    }
}
