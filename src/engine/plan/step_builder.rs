use super::context::PlanContext;
use super::lattice::{MergeInputs, StagePath};
use super::step::*;
use crate::engine::flat_table::FlatTableScript;
use crate::shared::config::EngineConfig;

pub const RAW_INPUT_FORMAT: &str = "TextInputFormat";

const JOB_LABEL_FACT_DISTINCT: &str = "Fact_Distinct_Columns";
const JOB_LABEL_BASE_CUBOID: &str = "Base_Cuboid_Builder";
const JOB_LABEL_ND_CUBOID: &str = "ND-Cuboid_Builder";
const JOB_LABEL_REGION_SPLITS: &str = "Region_Splits_Calculator";
const JOB_LABEL_MERGE_CUBOID: &str = "Merge_Cuboid";
const JOB_LABEL_HFILE: &str = "HFile_Generator";

/// Where extraction and the base cuboid read their rows from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CuboidSource {
    /// Output of the flattening step
    FlatTable { location: String },
    /// Raw fact table files, read as text
    FactTable { location: String },
}

impl CuboidSource {
    pub fn location(&self) -> &str {
        match self {
            CuboidSource::FlatTable { location } | CuboidSource::FactTable { location } => {
                location
            }
        }
    }
}

/// Turns planner outputs into fully parameterized steps.
///
/// Parameters are pushed in a fixed order per step kind; consumers that parse the rendered
/// command line rely on it.
pub struct StepBuilder<'a> {
    ctx: &'a PlanContext,
    config: &'a EngineConfig,
}

impl<'a> StepBuilder<'a> {
    pub fn new(ctx: &'a PlanContext, config: &'a EngineConfig) -> Self {
        Self { ctx, config }
    }

    fn job_name(&self, label: &str, sequence: usize) -> String {
        format!(
            "{}_{}_{}_Step_{}",
            self.config.job_name_prefix,
            label,
            self.ctx.cube_name(),
            sequence
        )
    }

    /// Leading parameters of every distributed job.
    fn distributed_params(&self) -> StepParams {
        let mut params = StepParams::new();
        if let Some(conf) = self.config.job_conf_file(self.ctx.descriptor().capacity) {
            params.path("conf", conf);
        }
        params
    }

    fn source_params(&self, source: &CuboidSource) -> StepParams {
        let mut params = self.distributed_params();
        if let CuboidSource::FactTable { .. } = source {
            params.text("inputformat", RAW_INPUT_FORMAT);
        }
        params
    }

    pub fn flat_table(&self, sequence: usize, script: &FlatTableScript) -> Step {
        let mut params = StepParams::new();
        params
            .script("drop", script.drop.as_str())
            .script("create", script.create.as_str())
            .script("insert", script.insert.as_str());

        Step::new(
            sequence,
            STEP_NAME_CREATE_FLAT_HIVE_TABLE,
            StepCategory::ShellHiveScript,
            params,
        )
    }

    pub fn fact_distinct_columns(&self, sequence: usize, source: &CuboidSource) -> Step {
        let mut params = self.source_params(source);
        params
            .text("cubename", self.ctx.cube_name())
            .path("input", source.location())
            .path("output", self.ctx.paths().fact_distinct_columns())
            .text("jobname", self.job_name(JOB_LABEL_FACT_DISTINCT, sequence));

        Step::new(
            sequence,
            STEP_NAME_FACT_DISTINCT_COLUMNS,
            StepCategory::FactDistinctColumns,
            params,
        )
    }

    pub fn build_dictionary(&self, sequence: usize) -> Step {
        let mut params = StepParams::new();
        params
            .text("cubename", self.ctx.cube_name())
            .text("segmentname", self.ctx.segment_name())
            .path("input", self.ctx.paths().fact_distinct_columns());

        Step::new(
            sequence,
            STEP_NAME_BUILD_DICTIONARY,
            StepCategory::BuildDictionary,
            params,
        )
    }

    pub fn base_cuboid(&self, sequence: usize, source: &CuboidSource, base: &StagePath) -> Step {
        let mut params = self.source_params(source);
        params
            .text("cubename", self.ctx.cube_name())
            .text("segmentname", self.ctx.segment_name())
            .path("input", source.location())
            .path("output", base.path.as_str())
            .text("jobname", self.job_name(JOB_LABEL_BASE_CUBOID, sequence))
            .number("level", 0);

        Step::new(
            sequence,
            STEP_NAME_BUILD_BASE_CUBOID,
            StepCategory::BaseCuboid,
            params,
        )
    }

    /// Aggregates stage `from` into stage `to`; `level` is the dimension count of `to`.
    pub fn nd_cuboid(&self, sequence: usize, from: &StagePath, to: &StagePath) -> Step {
        let mut params = self.distributed_params();
        params
            .text("cubename", self.ctx.cube_name())
            .text("segmentname", self.ctx.segment_name())
            .path("input", from.path.as_str())
            .path("output", to.path.as_str())
            .text("jobname", self.job_name(JOB_LABEL_ND_CUBOID, sequence))
            .number("level", to.dimensions as u64);

        Step::new(
            sequence,
            format!("{} : {}-Dimension", STEP_NAME_BUILD_N_D_CUBOID, to.dimensions),
            StepCategory::NdCuboid,
            params,
        )
    }

    pub fn range_key_distribution(&self, sequence: usize, input: &str) -> Step {
        let mut params = self.distributed_params();
        params
            .path("input", input)
            .path("output", self.ctx.paths().rowkey_stats())
            .text("jobname", self.job_name(JOB_LABEL_REGION_SPLITS, sequence))
            .text("cubename", self.ctx.cube_name());

        Step::new(
            sequence,
            STEP_NAME_GET_CUBOID_KEY_DISTRIBUTION,
            StepCategory::RangeKeyDistribution,
            params,
        )
    }

    pub fn create_storage_table(&self, sequence: usize) -> Step {
        let mut params = StepParams::new();
        params
            .text("cubename", self.ctx.cube_name())
            .path("input", self.ctx.paths().rowkey_stats_partition())
            .text("htablename", self.ctx.storage_table());

        Step::new(
            sequence,
            STEP_NAME_CREATE_HBASE_TABLE,
            StepCategory::CreateStorageTable,
            params,
        )
    }

    pub fn convert_to_hfile(&self, sequence: usize, input: &str) -> Step {
        let mut params = self.distributed_params();
        params
            .text("cubename", self.ctx.cube_name())
            .path("input", input)
            .path("output", self.ctx.paths().hfile())
            .text("htablename", self.ctx.storage_table())
            .text("jobname", self.job_name(JOB_LABEL_HFILE, sequence));

        Step::new(
            sequence,
            STEP_NAME_CONVERT_CUBOID_TO_HFILE,
            StepCategory::ConvertToHFile,
            params,
        )
    }

    pub fn bulk_load(&self, sequence: usize) -> Step {
        let mut params = StepParams::new();
        params
            .path("input", self.ctx.paths().hfile())
            .text("htablename", self.ctx.storage_table())
            .text("cubename", self.ctx.cube_name());

        Step::new(
            sequence,
            STEP_NAME_BULK_LOAD_HFILE,
            StepCategory::BulkLoad,
            params,
        )
    }

    pub fn merge_cuboid(&self, sequence: usize, inputs: &MergeInputs) -> Step {
        let mut params = self.distributed_params();
        params
            .text("cubename", self.ctx.cube_name())
            .text("segmentname", self.ctx.segment_name())
            .path("input", inputs.expression())
            .path("output", self.ctx.paths().merged_cuboid())
            .text("jobname", self.job_name(JOB_LABEL_MERGE_CUBOID, sequence));

        Step::new(
            sequence,
            STEP_NAME_MERGE_CUBOID,
            StepCategory::MergeCuboid,
            params,
        )
    }
}
