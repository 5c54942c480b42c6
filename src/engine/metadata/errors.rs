use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Cube not found: {0}")]
    CubeNotFound(String),

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Segment {segment} already stored in {existing}")]
    StorageLocationAssigned { segment: String, existing: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MetadataError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MetadataError::CubeNotFound(_) | MetadataError::TableNotFound(_)
        )
    }
}
