mod desc;
mod generator;


use thiserror::Error;

pub use desc::{FlatColumn, FlatJoin, JoinedFlatTableDesc};
pub use generator::{FlatTableGenerator, FlatTableScript, FlatTableTarget, HiveFlatTableGenerator};

#[derive(Debug, Error)]
pub enum FlatTableError {
    #[error("Cube over {0} selects no columns")]
    NoColumns(String),

    #[error("Column {column} references table {table} which is not joined")]
    UnknownTable { table: String, column: String },

    #[error("Join on {table} has {primary} primary key and {foreign} foreign key columns")]
    JoinKeyMismatch {
        table: String,
        primary: usize,
        foreign: usize,
    },

    #[error("Segment {segment} has an invalid date range [{start}, {end})")]
    InvalidDateRange {
        segment: String,
        start: i64,
        end: i64,
    },
}
