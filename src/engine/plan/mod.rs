pub mod build;
pub mod command_line;
pub mod compiler;
pub mod context;
pub mod job_plan;
pub mod lattice;
pub mod merge;
pub mod paths;
pub mod request;
pub mod step;
pub mod step_builder;


pub use compiler::PlanCompiler;
pub use context::PlanContext;
pub use job_plan::Plan;
pub use lattice::{CuboidLattice, MergeInputs, StagePath};
pub use paths::CubePaths;
pub use request::{JobTarget, PlanMode, PlanRequest};
pub use step::{ExecMode, ParamValue, Step, StepCategory, StepFamily, StepParam, StepStatus};
