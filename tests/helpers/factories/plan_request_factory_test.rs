use crate::engine::plan::PlanMode;
use crate::test_helpers::factories::plan_request_factory::{DEFAULT_JOB_ID, DEFAULT_WORKING_ROOT};
use crate::test_helpers::factory::Factory;

#[test]
fn test_plan_request_factory() {
    let build = Factory::build_request().create();
    assert_eq!(build.mode(), PlanMode::Build);
    assert_eq!(build.target().job_id, DEFAULT_JOB_ID);
    assert_eq!(build.target().working_root, DEFAULT_WORKING_ROOT);

    let merge = Factory::merge_request()
        .with_cube("orders")
        .with_segment("q1")
        .with_job_id("job-7")
        .with_working_root("/tmp/plans")
        .create();
    assert_eq!(merge.mode(), PlanMode::Merge);
    assert_eq!(merge.target().cube_name, "orders");
    assert_eq!(merge.target().segment_name, "q1");
    assert_eq!(merge.target().job_id, "job-7");
    assert_eq!(merge.target().working_root, "/tmp/plans");
}
