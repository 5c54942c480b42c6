pub mod cube_factory;
pub mod engine_config_factory;
pub mod metadata_store_factory;
pub mod plan_request_factory;
pub mod segment_factory;

pub use cube_factory::CubeFactory;
pub use engine_config_factory::EngineConfigFactory;
pub use metadata_store_factory::MetadataStoreFactory;
pub use plan_request_factory::PlanRequestFactory;
pub use segment_factory::SegmentFactory;

#[cfg(test)]
mod cube_factory_test;
#[cfg(test)]
mod plan_request_factory_test;
#[cfg(test)]
mod segment_factory_test;
