pub use super::factories::{
    CubeFactory, EngineConfigFactory, MetadataStoreFactory, PlanRequestFactory, SegmentFactory,
};

pub struct Factory;

impl Factory {
    pub fn cube() -> CubeFactory {
        CubeFactory::new()
    }

    pub fn segment() -> SegmentFactory {
        SegmentFactory::new()
    }

    pub fn metadata_store() -> MetadataStoreFactory {
        MetadataStoreFactory::new()
    }

    pub fn engine_config() -> EngineConfigFactory {
        EngineConfigFactory::new()
    }

    pub fn build_request() -> PlanRequestFactory {
        PlanRequestFactory::build()
    }

    pub fn merge_request() -> PlanRequestFactory {
        PlanRequestFactory::merge()
    }
}
