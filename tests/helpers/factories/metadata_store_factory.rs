use std::sync::Arc;

use crate::engine::metadata::{CubeInstance, InMemoryMetadataStore};
use crate::test_helpers::factories::CubeFactory;

/// Factory for creating an `InMemoryMetadataStore` in tests.
///
/// Starts with the fact table of the default cube registered; cubes are added explicitly.
pub struct MetadataStoreFactory {
    cubes: Vec<CubeInstance>,
    tables: Vec<(String, String)>,
}

impl MetadataStoreFactory {
    pub fn new() -> Self {
        Self {
            cubes: Vec::new(),
            tables: vec![(
                "DEFAULT.SALES_FACT".to_string(),
                "hdfs:///warehouse/sales_fact".to_string(),
            )],
        }
    }

    pub fn with_default_cube(self) -> Self {
        self.with_cube(CubeFactory::new().create())
    }

    pub fn with_cube(mut self, cube: CubeInstance) -> Self {
        self.cubes.push(cube);
        self
    }

    pub fn with_table(mut self, name: &str, location: &str) -> Self {
        self.tables.push((name.to_string(), location.to_string()));
        self
    }

    pub fn without_tables(mut self) -> Self {
        self.tables.clear();
        self
    }

    pub fn create(self) -> InMemoryMetadataStore {
        let mut store = InMemoryMetadataStore::new();
        for cube in self.cubes {
            store.insert_cube(cube);
        }
        for (name, location) in &self.tables {
            store.insert_table(name, location);
        }
        store
    }

    pub fn create_arc(self) -> Arc<InMemoryMetadataStore> {
        Arc::new(self.create())
    }
}
