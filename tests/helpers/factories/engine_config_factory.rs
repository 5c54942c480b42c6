use std::sync::Arc;

use crate::engine::metadata::CubeCapacity;
use crate::shared::config::EngineConfig;

/// Factory for creating `EngineConfig` instances in tests.
pub struct EngineConfigFactory {
    inner: EngineConfig,
}

impl EngineConfigFactory {
    pub fn new() -> Self {
        Self {
            inner: EngineConfig::default(),
        }
    }

    pub fn with_flat_table(mut self, enabled: bool) -> Self {
        self.inner.flat_table_by_hive = enabled;
        self
    }

    pub fn with_job_conf(mut self, capacity: CubeCapacity, path: &str) -> Self {
        self.inner
            .job_conf_files
            .insert(capacity.as_str().to_string(), path.to_string());
        self
    }

    pub fn with_default_job_conf(mut self, path: &str) -> Self {
        self.inner.default_job_conf = Some(path.to_string());
        self
    }

    pub fn with_job_name_prefix(mut self, prefix: &str) -> Self {
        self.inner.job_name_prefix = prefix.to_string();
        self
    }

    pub fn create(self) -> EngineConfig {
        self.inner
    }

    pub fn create_arc(self) -> Arc<EngineConfig> {
        Arc::new(self.inner)
    }
}
