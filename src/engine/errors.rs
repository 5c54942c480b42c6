use thiserror::Error;
use tracing::{debug, error};

use crate::engine::flat_table::FlatTableError;
use crate::engine::metadata::MetadataError;

/// Errors that can occur while compiling a build or merge plan.
///
/// Every variant is raised before the first step is emitted; a failed compilation never
/// yields a partial plan.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid plan request: {0}")]
    InvalidRequest(String),

    #[error("Metadata resolution failed: {0}")]
    MetadataResolution(#[from] MetadataError),

    #[error("Flat table script generation failed: {0}")]
    DescriptorGeneration(#[from] FlatTableError),
}

impl PlanError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        PlanError::InvalidRequest(reason.into())
    }

    pub fn log_error(&self) {
        match self {
            PlanError::InvalidRequest(reason) => {
                error!("Rejected plan request: {}", reason);
            }
            PlanError::MetadataResolution(e) => {
                error!("Metadata resolution failed: {}", e);
                debug!("Metadata error details: {:?}", e);
            }
            PlanError::DescriptorGeneration(e) => {
                error!("Flat table script generation failed: {}", e);
                debug!("Flat table error details: {:?}", e);
            }
        }
    }
}
