mod errors;
mod store;
mod types;


pub use errors::MetadataError;
pub use store::{InMemoryMetadataStore, MetadataSnapshot, MetadataStore, TableDesc};
pub use types::{
    CubeCapacity, CubeDescriptor, CubeInstance, DimensionDesc, JoinDesc, JoinType, MeasureDesc,
    RowKeyColumn, RowKeyDesc, Segment, SegmentStatus,
};
