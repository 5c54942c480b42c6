use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::{CubeInstance, MetadataError};

/// Read access to cube and table metadata.
///
/// Cubes are handed out as shared snapshots; callers never mutate them.
pub trait MetadataStore: Send + Sync {
    fn cube(&self, name: &str) -> Result<Arc<CubeInstance>, MetadataError>;

    /// Storage location of a source table (e.g. the raw fact table).
    fn table_location(&self, table: &str) -> Result<String, MetadataError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDesc {
    pub name: String,
    pub location: String,
}

/// On-disk JSON layout accepted by [`InMemoryMetadataStore::from_json_file`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataSnapshot {
    #[serde(default)]
    pub cubes: Vec<CubeInstance>,
    #[serde(default)]
    pub tables: Vec<TableDesc>,
}

#[derive(Debug, Default)]
pub struct InMemoryMetadataStore {
    cubes: HashMap<String, Arc<CubeInstance>>,
    /// Keyed by upper-cased table name
    tables: HashMap<String, String>,
}

impl InMemoryMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: MetadataSnapshot) -> Self {
        let mut store = Self::new();
        for cube in snapshot.cubes {
            store.insert_cube(cube);
        }
        for table in snapshot.tables {
            store.insert_table(&table.name, &table.location);
        }
        store
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, MetadataError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let snapshot: MetadataSnapshot = serde_json::from_str(&raw)?;
        tracing::debug!(
            target: "metadata_store::load",
            path = %path.as_ref().display(),
            cubes = snapshot.cubes.len(),
            tables = snapshot.tables.len(),
            "Loaded metadata snapshot"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn insert_cube(&mut self, cube: CubeInstance) {
        self.cubes.insert(cube.name.clone(), Arc::new(cube));
    }

    pub fn insert_table(&mut self, name: &str, location: &str) {
        self.tables
            .insert(name.to_ascii_uppercase(), location.to_string());
    }

    pub fn cube_count(&self) -> usize {
        self.cubes.len()
    }
}

impl MetadataStore for InMemoryMetadataStore {
    fn cube(&self, name: &str) -> Result<Arc<CubeInstance>, MetadataError> {
        self.cubes
            .get(name)
            .cloned()
            .ok_or_else(|| MetadataError::CubeNotFound(name.to_string()))
    }

    fn table_location(&self, table: &str) -> Result<String, MetadataError> {
        self.tables
            .get(&table.to_ascii_uppercase())
            .cloned()
            .ok_or_else(|| MetadataError::TableNotFound(table.to_string()))
    }
}
