use serde::{Deserialize, Serialize};

use super::MetadataError;

/// Size class of a cube; selects the distributed job configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeCapacity {
    Small,
    #[default]
    Medium,
    Large,
}

impl CubeCapacity {
    pub fn as_str(&self) -> &'static str {
        match self {
            CubeCapacity::Small => "small",
            CubeCapacity::Medium => "medium",
            CubeCapacity::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinType {
    #[default]
    Inner,
    Left,
}

impl JoinType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinDesc {
    #[serde(default)]
    pub join_type: JoinType,
    /// Columns of the lookup table
    pub primary_key: Vec<String>,
    /// Matching columns of the fact table, same order as `primary_key`
    pub foreign_key: Vec<String>,
}

/// A dimension backed either by the fact table itself or by a joined lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionDesc {
    pub name: String,
    pub table: String,
    #[serde(default)]
    pub join: Option<JoinDesc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowKeyColumn {
    pub column: String,
    /// Owning table; the fact table when absent
    #[serde(default)]
    pub table: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowKeyDesc {
    pub columns: Vec<RowKeyColumn>,
    /// Number of reduction levels materialized below the base cuboid
    pub build_levels: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureDesc {
    pub name: String,
    /// Fact column the measure aggregates; `None` for COUNT(*)-style measures
    #[serde(default)]
    pub column: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeDescriptor {
    pub fact_table: String,
    #[serde(default)]
    pub dimensions: Vec<DimensionDesc>,
    pub rowkey: RowKeyDesc,
    #[serde(default)]
    pub measures: Vec<MeasureDesc>,
    /// Fact column used to restrict a segment to its date range
    #[serde(default)]
    pub partition_column: Option<String>,
    #[serde(default)]
    pub capacity: CubeCapacity,
}

impl CubeDescriptor {
    pub fn dimension_count(&self) -> usize {
        self.rowkey.columns.len()
    }

    pub fn build_levels(&self) -> usize {
        self.rowkey.build_levels
    }

    /// Lookup dimension joined on `table`, if any.
    pub fn lookup(&self, table: &str) -> Option<&DimensionDesc> {
        self.dimensions
            .iter()
            .find(|d| d.join.is_some() && d.table.eq_ignore_ascii_case(table))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentStatus {
    New,
    Ready,
    ReadyPending,
    Merging,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub status: SegmentStatus,
    #[serde(default)]
    storage_location_identifier: Option<String>,
    /// Job whose working directory holds this segment's cuboid output
    #[serde(default)]
    pub last_build_job_id: Option<String>,
    #[serde(default)]
    pub date_range_start: i64,
    #[serde(default)]
    pub date_range_end: i64,
}

impl Segment {
    pub fn new(name: impl Into<String>, status: SegmentStatus) -> Self {
        Self {
            name: name.into(),
            status,
            storage_location_identifier: None,
            last_build_job_id: None,
            date_range_start: 0,
            date_range_end: 0,
        }
    }

    pub fn storage_location_identifier(&self) -> Option<&str> {
        self.storage_location_identifier.as_deref()
    }

    /// Assigns the physical table name. A segment keeps its first assignment for life;
    /// re-assigning the same name is a no-op, a different name is rejected.
    pub fn assign_storage_location(&mut self, identifier: &str) -> Result<(), MetadataError> {
        match self.storage_location_identifier.as_deref() {
            Some(existing) if existing == identifier => Ok(()),
            Some(existing) => Err(MetadataError::StorageLocationAssigned {
                segment: self.name.clone(),
                existing: existing.to_string(),
            }),
            None => {
                self.storage_location_identifier = Some(identifier.to_string());
                Ok(())
            }
        }
    }

    /// True when `other`'s date range lies inside this segment's range.
    pub fn covers(&self, other: &Segment) -> bool {
        other.date_range_start >= self.date_range_start
            && other.date_range_end <= self.date_range_end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeInstance {
    pub name: String,
    pub descriptor: CubeDescriptor,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl CubeInstance {
    pub fn segment(&self, name: &str, status: SegmentStatus) -> Option<&Segment> {
        self.segments
            .iter()
            .find(|s| s.name == name && s.status == status)
    }

    /// Built segments consumed by a merge into `target`, ordered by range start.
    pub fn merging_segments(&self, target: &Segment) -> Vec<&Segment> {
        let mut ancestors: Vec<&Segment> = self
            .segments
            .iter()
            .filter(|s| s.name != target.name)
            .filter(|s| matches!(s.status, SegmentStatus::Ready | SegmentStatus::Merging))
            .filter(|s| target.covers(s))
            .collect();
        ancestors.sort_by(|a, b| {
            a.date_range_start
                .cmp(&b.date_range_start)
                .then_with(|| a.name.cmp(&b.name))
        });
        ancestors
    }
}
