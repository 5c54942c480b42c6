use crate::engine::metadata::SegmentStatus;
use crate::test_helpers::factory::Factory;

#[test]
fn test_segment_factory() {
    let segment = Factory::segment()
        .with_name("seg9")
        .with_status(SegmentStatus::Merging)
        .with_storage_location("CUBE_SEG9")
        .with_last_build_job("job-9")
        .with_range(10, 20)
        .create();

    assert_eq!(segment.name, "seg9");
    assert_eq!(segment.status, SegmentStatus::Merging);
    assert_eq!(segment.storage_location_identifier(), Some("CUBE_SEG9"));
    assert_eq!(segment.last_build_job_id.as_deref(), Some("job-9"));
    assert_eq!((segment.date_range_start, segment.date_range_end), (10, 20));
}

#[test]
fn test_segment_factory_ready_list() {
    let segments = Factory::segment()
        .with_name("day")
        .with_range(1_000, 1_000)
        .create_ready_list(3, 50);

    let ranges: Vec<(i64, i64)> = segments
        .iter()
        .map(|s| (s.date_range_start, s.date_range_end))
        .collect();
    assert_eq!(ranges, vec![(1_000, 1_050), (1_050, 1_100), (1_100, 1_150)]);
    assert_eq!(segments[2].name, "day_3");
    assert_eq!(segments[2].last_build_job_id.as_deref(), Some("build-job-3"));
    assert!(segments.iter().all(|s| s.status == SegmentStatus::Ready));
}
