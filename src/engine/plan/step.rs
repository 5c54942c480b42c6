use serde::Serialize;
use std::fmt::{Display, Formatter};

pub const STEP_NAME_CREATE_FLAT_HIVE_TABLE: &str = "Create Intermediate Flat Hive Table";
pub const STEP_NAME_FACT_DISTINCT_COLUMNS: &str = "Extract Fact Table Distinct Columns";
pub const STEP_NAME_BUILD_DICTIONARY: &str = "Build Dimension Dictionary";
pub const STEP_NAME_BUILD_BASE_CUBOID: &str = "Build Base Cuboid Data";
pub const STEP_NAME_BUILD_N_D_CUBOID: &str = "Build N-Dimension Cuboid Data";
pub const STEP_NAME_GET_CUBOID_KEY_DISTRIBUTION: &str = "Calculate HTable Region Splits";
pub const STEP_NAME_CREATE_HBASE_TABLE: &str = "Create HTable";
pub const STEP_NAME_CONVERT_CUBOID_TO_HFILE: &str = "Convert Cuboid Data to HFile";
pub const STEP_NAME_BULK_LOAD_HFILE: &str = "Load HFile to HBase Table";
pub const STEP_NAME_MERGE_CUBOID: &str = "Merge Cuboid Data";

/// Whether the execution engine must poll the step to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecMode {
    Sync,
    Async,
}

/// Which kind of executor a step is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepFamily {
    /// Shell or SQL script run on the gateway host
    Shell,
    /// Local call against the cluster without a distributed job
    Administrative,
    /// Distributed job submitted to the compute cluster
    DistributedCompute,
}

impl StepFamily {
    pub fn is_local(&self) -> bool {
        !matches!(self, StepFamily::DistributedCompute)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepCategory {
    ShellHiveScript,
    BuildDictionary,
    CreateStorageTable,
    BulkLoad,
    FactDistinctColumns,
    BaseCuboid,
    NdCuboid,
    RangeKeyDistribution,
    MergeCuboid,
    ConvertToHFile,
}

impl StepCategory {
    pub fn family(&self) -> StepFamily {
        match self {
            StepCategory::ShellHiveScript => StepFamily::Shell,
            StepCategory::BuildDictionary
            | StepCategory::CreateStorageTable
            | StepCategory::BulkLoad => StepFamily::Administrative,
            StepCategory::FactDistinctColumns
            | StepCategory::BaseCuboid
            | StepCategory::NdCuboid
            | StepCategory::RangeKeyDistribution
            | StepCategory::MergeCuboid
            | StepCategory::ConvertToHFile => StepFamily::DistributedCompute,
        }
    }

    /// Distributed jobs run asynchronously, everything else runs in place.
    pub fn exec_mode(&self) -> ExecMode {
        if self.family().is_local() {
            ExecMode::Sync
        } else {
            ExecMode::Async
        }
    }
}

/// Lifecycle of a step. The planner only ever emits `Pending`; the execution engine
/// advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepStatus {
    #[default]
    Pending,
    Running,
    Finished,
    Error,
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ParamValue {
    Text(String),
    Path(String),
    Number(u64),
    /// Multi-line script text (HiveQL)
    Script(String),
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Text(v) | ParamValue::Path(v) | ParamValue::Script(v) => f.write_str(v),
            ParamValue::Number(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepParam {
    pub key: String,
    pub value: ParamValue,
}

/// Ordered key/value parameters of a step. Insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StepParams(Vec<StepParam>);

impl StepParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: ParamValue) -> &mut Self {
        self.0.push(StepParam {
            key: key.to_string(),
            value,
        });
        self
    }

    pub fn text(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.push(key, ParamValue::Text(value.into()))
    }

    pub fn path(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.push(key, ParamValue::Path(value.into()))
    }

    pub fn number(&mut self, key: &str, value: u64) -> &mut Self {
        self.push(key, ParamValue::Number(value))
    }

    pub fn script(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.push(key, ParamValue::Script(value.into()))
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.iter().find(|p| p.key == key).map(|p| &p.value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|p| p.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepParam> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One executable unit of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub sequence: usize,
    pub name: String,
    pub params: StepParams,
    pub category: StepCategory,
    pub exec_mode: ExecMode,
    pub status: StepStatus,
}

impl Step {
    pub fn new(
        sequence: usize,
        name: impl Into<String>,
        category: StepCategory,
        params: StepParams,
    ) -> Self {
        Self {
            sequence,
            name: name.into(),
            params,
            category,
            exec_mode: category.exec_mode(),
            status: StepStatus::Pending,
        }
    }

    pub fn is_async(&self) -> bool {
        self.exec_mode == ExecMode::Async
    }

    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// String form of a parameter, for assertions and diagnostics.
    pub fn param_str(&self, key: &str) -> Option<String> {
        self.params.get(key).map(ToString::to_string)
    }
}
