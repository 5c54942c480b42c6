use crate::engine::metadata::{
    CubeCapacity, CubeDescriptor, CubeInstance, DimensionDesc, JoinDesc, JoinType, MeasureDesc,
    RowKeyColumn, RowKeyDesc, Segment,
};
use crate::test_helpers::factories::SegmentFactory;

/// Factory for creating `CubeInstance` instances in tests.
///
/// Defaults to the "sales" cube: 4 row-key columns on the fact table, 2 build levels,
/// one NEW segment "seg1".
pub struct CubeFactory {
    name: String,
    fact_table: String,
    rowkey_columns: Vec<RowKeyColumn>,
    build_levels: usize,
    dimensions: Vec<DimensionDesc>,
    measures: Vec<MeasureDesc>,
    partition_column: Option<String>,
    capacity: CubeCapacity,
    segments: Vec<Segment>,
}

impl CubeFactory {
    pub fn new() -> Self {
        Self {
            name: "sales".to_string(),
            fact_table: "DEFAULT.SALES_FACT".to_string(),
            rowkey_columns: fact_columns(&["CAL_DT", "SITE_ID", "CATEG_ID", "SELLER_ID"]),
            build_levels: 2,
            dimensions: Vec::new(),
            measures: vec![
                MeasureDesc {
                    name: "GMV_SUM".to_string(),
                    column: Some("PRICE".to_string()),
                },
                MeasureDesc {
                    name: "TRANS_CNT".to_string(),
                    column: None,
                },
            ],
            partition_column: None,
            capacity: CubeCapacity::Medium,
            segments: vec![SegmentFactory::new().create()],
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_fact_table(mut self, table: &str) -> Self {
        self.fact_table = table.to_string();
        self
    }

    /// Replaces the row key with `count` generated fact columns.
    pub fn with_dimension_count(mut self, count: usize) -> Self {
        let names: Vec<String> = (1..=count).map(|i| format!("DIM_{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        self.rowkey_columns = fact_columns(&refs);
        self
    }

    pub fn with_rowkey_column(mut self, table: Option<&str>, column: &str) -> Self {
        self.rowkey_columns.push(RowKeyColumn {
            column: column.to_string(),
            table: table.map(str::to_string),
        });
        self
    }

    pub fn with_build_levels(mut self, levels: usize) -> Self {
        self.build_levels = levels;
        self
    }

    pub fn with_lookup(mut self, table: &str, foreign_key: &str, primary_key: &str) -> Self {
        self.dimensions.push(DimensionDesc {
            name: table.rsplit('.').next().unwrap_or(table).to_string(),
            table: table.to_string(),
            join: Some(JoinDesc {
                join_type: JoinType::Inner,
                primary_key: vec![primary_key.to_string()],
                foreign_key: vec![foreign_key.to_string()],
            }),
        });
        self
    }

    pub fn with_measures(mut self, measures: Vec<MeasureDesc>) -> Self {
        self.measures = measures;
        self
    }

    pub fn with_partition_column(mut self, column: &str) -> Self {
        self.partition_column = Some(column.to_string());
        self
    }

    pub fn with_capacity(mut self, capacity: CubeCapacity) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn with_segments(mut self, segments: Vec<Segment>) -> Self {
        self.segments = segments;
        self
    }

    pub fn descriptor(&self) -> CubeDescriptor {
        CubeDescriptor {
            fact_table: self.fact_table.clone(),
            dimensions: self.dimensions.clone(),
            rowkey: RowKeyDesc {
                columns: self.rowkey_columns.clone(),
                build_levels: self.build_levels,
            },
            measures: self.measures.clone(),
            partition_column: self.partition_column.clone(),
            capacity: self.capacity,
        }
    }

    pub fn create(self) -> CubeInstance {
        CubeInstance {
            descriptor: self.descriptor(),
            name: self.name,
            segments: self.segments,
        }
    }
}

fn fact_columns(names: &[&str]) -> Vec<RowKeyColumn> {
    names
        .iter()
        .map(|name| RowKeyColumn {
            column: name.to_string(),
            table: None,
        })
        .collect()
}
