use std::sync::Arc;

use super::build::BuildPlanAssembler;
use super::context::PlanContext;
use super::job_plan::Plan;
use super::merge::MergePlanAssembler;
use super::request::PlanRequest;
use crate::engine::errors::PlanError;
use crate::engine::flat_table::{FlatTableGenerator, HiveFlatTableGenerator};
use crate::engine::metadata::MetadataStore;
use crate::shared::config::EngineConfig;

/// Compiles build and merge requests into ordered step plans.
///
/// Holds only shared, read-only collaborators, so one compiler can serve concurrent
/// callers.
pub struct PlanCompiler<S: MetadataStore> {
    store: Arc<S>,
    config: Arc<EngineConfig>,
    generator: Arc<dyn FlatTableGenerator>,
}

impl<S: MetadataStore> PlanCompiler<S> {
    pub fn new(store: Arc<S>, config: Arc<EngineConfig>) -> Self {
        Self::with_generator(store, config, Arc::new(HiveFlatTableGenerator::new()))
    }

    pub fn with_generator(
        store: Arc<S>,
        config: Arc<EngineConfig>,
        generator: Arc<dyn FlatTableGenerator>,
    ) -> Self {
        Self {
            store,
            config,
            generator,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn compile(&self, request: &PlanRequest) -> Result<Plan, PlanError> {
        let result = self.compile_inner(request);
        match &result {
            Ok(plan) => {
                tracing::info!(
                    target: "plan_compiler::compile",
                    mode = %plan.mode(),
                    job_id = %plan.job_id(),
                    steps = plan.len(),
                    "Compiled plan"
                );
                if tracing::enabled!(tracing::Level::DEBUG) {
                    match serde_json::to_string_pretty(plan) {
                        Ok(json) => tracing::debug!(target: "plan_compiler::compile", "{}", json),
                        Err(e) => tracing::error!("Failed to serialize plan: {}", e),
                    }
                }
            }
            Err(e) => e.log_error(),
        }
        result
    }

    fn compile_inner(&self, request: &PlanRequest) -> Result<Plan, PlanError> {
        let ctx = PlanContext::resolve(request, self.store.as_ref())?;
        match request {
            PlanRequest::Build(_) => BuildPlanAssembler::new(
                &ctx,
                &self.config,
                self.store.as_ref(),
                self.generator.as_ref(),
            )
            .assemble(),
            PlanRequest::Merge(_) => MergePlanAssembler::new(&ctx, &self.config).assemble(),
        }
    }
}
