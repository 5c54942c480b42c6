use crate::engine::metadata::{CubeCapacity, JoinType, SegmentStatus};
use crate::test_helpers::factory::Factory;

#[test]
fn test_cube_factory_defaults() {
    let cube = Factory::cube().create();

    assert_eq!(cube.name, "sales");
    assert_eq!(cube.descriptor.fact_table, "DEFAULT.SALES_FACT");
    assert_eq!(cube.descriptor.dimension_count(), 4);
    assert_eq!(cube.descriptor.build_levels(), 2);
    assert_eq!(cube.descriptor.capacity, CubeCapacity::Medium);
    assert_eq!(cube.segments.len(), 1);
    assert_eq!(cube.segments[0].status, SegmentStatus::New);
}

#[test]
fn test_cube_factory_overrides() {
    let cube = Factory::cube()
        .with_name("orders")
        .with_fact_table("SHOP.ORDERS")
        .with_dimension_count(6)
        .with_build_levels(5)
        .with_lookup("SHOP.REGIONS", "REGION_ID", "ID")
        .with_partition_column("ORDER_DT")
        .with_capacity(CubeCapacity::Small)
        .with_segments(Vec::new())
        .create();

    assert_eq!(cube.name, "orders");
    assert_eq!(cube.descriptor.rowkey.columns[5].column, "DIM_6");
    assert_eq!(cube.descriptor.build_levels(), 5);
    let lookup = cube.descriptor.lookup("SHOP.REGIONS").unwrap();
    assert_eq!(lookup.name, "REGIONS");
    assert_eq!(lookup.join.as_ref().unwrap().join_type, JoinType::Inner);
    assert_eq!(cube.descriptor.partition_column.as_deref(), Some("ORDER_DT"));
    assert!(cube.segments.is_empty());
}
