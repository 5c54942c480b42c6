use super::context::PlanContext;
use super::job_plan::{Plan, PlanBuilder};
use super::lattice::CuboidLattice;
use super::paths::flat_table_name;
use super::step_builder::{CuboidSource, StepBuilder};
use crate::engine::errors::PlanError;
use crate::engine::flat_table::{FlatTableGenerator, FlatTableScript, FlatTableTarget};
use crate::engine::metadata::MetadataStore;
use crate::shared::config::EngineConfig;

/// Sequences the steps that build a NEW segment from source data.
pub struct BuildPlanAssembler<'a> {
    ctx: &'a PlanContext,
    config: &'a EngineConfig,
    store: &'a dyn MetadataStore,
    generator: &'a dyn FlatTableGenerator,
}

impl<'a> BuildPlanAssembler<'a> {
    pub fn new(
        ctx: &'a PlanContext,
        config: &'a EngineConfig,
        store: &'a dyn MetadataStore,
        generator: &'a dyn FlatTableGenerator,
    ) -> Self {
        Self {
            ctx,
            config,
            store,
            generator,
        }
    }

    pub fn assemble(&self) -> Result<Plan, PlanError> {
        let descriptor = self.ctx.descriptor();
        let paths = self.ctx.paths();

        // Everything fallible happens before the first step is built.
        let lattice = CuboidLattice::plan(
            paths,
            descriptor.dimension_count(),
            descriptor.build_levels(),
        )?;
        let (flat_script, source) = self.resolve_source()?;

        let steps = StepBuilder::new(self.ctx, self.config);
        let mut plan = PlanBuilder::new(self.ctx.mode(), self.ctx.job_id(), paths.job_dir());

        if let Some(script) = &flat_script {
            plan.push_with(|seq| steps.flat_table(seq, script));
        }
        plan.push_with(|seq| steps.fact_distinct_columns(seq, &source))
            .push_with(|seq| steps.build_dictionary(seq))
            .push_with(|seq| steps.base_cuboid(seq, &source, lattice.base()));
        for (from, to) in lattice.transitions() {
            plan.push_with(|seq| steps.nd_cuboid(seq, from, to));
        }

        let cuboids = paths.cuboid_glob();
        plan.push_with(|seq| steps.range_key_distribution(seq, &cuboids))
            .push_with(|seq| steps.create_storage_table(seq))
            .push_with(|seq| steps.convert_to_hfile(seq, &cuboids))
            .push_with(|seq| steps.bulk_load(seq));

        tracing::info!(
            target: "build_plan::assemble",
            cube = %self.ctx.cube_name(),
            segment = %self.ctx.segment_name(),
            dimensions = lattice.total_dimensions(),
            stages = lattice.len(),
            flat_table = flat_script.is_some(),
            "Assembled build plan"
        );

        Ok(plan.finish())
    }

    /// Flattening script (when enabled) and the location extraction reads from.
    fn resolve_source(&self) -> Result<(Option<FlatTableScript>, CuboidSource), PlanError> {
        if !self.config.flat_table_by_hive {
            let location = self
                .store
                .table_location(&self.ctx.descriptor().fact_table)?;
            return Ok((None, CuboidSource::FactTable { location }));
        }

        let table_name = flat_table_name(
            &self.config.flat_table_prefix,
            self.ctx.cube_name(),
            self.ctx.segment_name(),
            self.ctx.job_id(),
        )?;
        let location = self.ctx.paths().flat_table_dir(&table_name);
        let script = self.generator.generate(
            self.ctx.descriptor(),
            self.ctx.segment(),
            FlatTableTarget {
                table_name: &table_name,
                location: &location,
            },
        )?;

        Ok((Some(script), CuboidSource::FlatTable { location }))
    }
}
