pub mod errors;
pub mod flat_table;
pub mod metadata;
pub mod plan;

pub use errors::*;
