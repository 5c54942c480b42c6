use chrono::DateTime;
use serde::Serialize;
use std::fmt::Write;

use super::FlatTableError;
use super::desc::{FACT_TABLE_ALIAS, JoinedFlatTableDesc};
use crate::engine::metadata::{CubeDescriptor, Segment};

/// Where the flattened rows of one segment go.
#[derive(Debug, Clone, Copy)]
pub struct FlatTableTarget<'a> {
    pub table_name: &'a str,
    pub location: &'a str,
}

/// Script text that materializes a segment's flattened source rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatTableScript {
    pub table_name: String,
    pub location: String,
    pub drop: String,
    pub create: String,
    pub insert: String,
}

/// Produces the drop/create/insert statements of the flattening stage.
pub trait FlatTableGenerator: Send + Sync {
    fn generate(
        &self,
        descriptor: &CubeDescriptor,
        segment: &Segment,
        target: FlatTableTarget<'_>,
    ) -> Result<FlatTableScript, FlatTableError>;
}

/// HiveQL flavoured generator: an external SEQUENCEFILE table filled with
/// `INSERT OVERWRITE ... SELECT` over the joined star schema.
#[derive(Debug, Clone, Default)]
pub struct HiveFlatTableGenerator;

impl HiveFlatTableGenerator {
    pub fn new() -> Self {
        Self
    }

    fn drop_statement(table_name: &str) -> String {
        format!("DROP TABLE IF EXISTS {table_name};")
    }

    fn create_statement(desc: &JoinedFlatTableDesc, target: FlatTableTarget<'_>) -> String {
        let mut sql = String::new();
        let _ = writeln!(sql, "CREATE EXTERNAL TABLE IF NOT EXISTS {}", target.table_name);
        sql.push_str("(\n");
        for (i, column) in desc.columns.iter().enumerate() {
            let sep = if i == 0 { "" } else { "," };
            let _ = writeln!(sql, "{sep}{} string", column.alias);
        }
        sql.push_str(")\n");
        sql.push_str("ROW FORMAT DELIMITED FIELDS TERMINATED BY '\\177'\n");
        sql.push_str("STORED AS SEQUENCEFILE\n");
        let _ = write!(sql, "LOCATION '{}';", target.location);
        sql
    }

    fn insert_statement(
        desc: &JoinedFlatTableDesc,
        segment: &Segment,
        target: FlatTableTarget<'_>,
    ) -> Result<String, FlatTableError> {
        let mut sql = String::new();
        let _ = writeln!(sql, "INSERT OVERWRITE TABLE {} SELECT", target.table_name);
        for (i, column) in desc.columns.iter().enumerate() {
            let sep = if i == 0 { "" } else { "," };
            let _ = writeln!(sql, "{sep}{}", column.qualified());
        }
        let _ = writeln!(sql, "FROM {} as {}", desc.fact_table, FACT_TABLE_ALIAS);
        for join in &desc.joins {
            let _ = writeln!(
                sql,
                "{} {} as {}",
                join.join_type.as_sql(),
                join.table,
                join.alias
            );
            let conditions: Vec<String> = join
                .keys
                .iter()
                .map(|(fk, pk)| format!("{FACT_TABLE_ALIAS}.{fk} = {}.{pk}", join.alias))
                .collect();
            let _ = writeln!(sql, "ON {}", conditions.join(" AND "));
        }
        if let Some(filter) = Self::partition_filter(desc, segment)? {
            let _ = writeln!(sql, "WHERE {filter}");
        }
        sql.push(';');
        Ok(sql)
    }

    fn partition_filter(
        desc: &JoinedFlatTableDesc,
        segment: &Segment,
    ) -> Result<Option<String>, FlatTableError> {
        let Some(column) = desc.partition_column.as_deref() else {
            return Ok(None);
        };
        let column = if column.contains('.') {
            column.to_string()
        } else {
            format!("{FACT_TABLE_ALIAS}.{column}")
        };

        let (start, end) = (segment.date_range_start, segment.date_range_end);
        if end != 0 && end < start {
            return Err(FlatTableError::InvalidDateRange {
                segment: segment.name.clone(),
                start,
                end,
            });
        }

        let mut conditions = Vec::new();
        if start > 0 {
            conditions.push(format!("{column} >= '{}'", format_date(segment, start)?));
        }
        if end > 0 && end != i64::MAX {
            conditions.push(format!("{column} < '{}'", format_date(segment, end)?));
        }

        if conditions.is_empty() {
            return Ok(None);
        }
        Ok(Some(format!("({})", conditions.join(" AND "))))
    }
}

impl FlatTableGenerator for HiveFlatTableGenerator {
    fn generate(
        &self,
        descriptor: &CubeDescriptor,
        segment: &Segment,
        target: FlatTableTarget<'_>,
    ) -> Result<FlatTableScript, FlatTableError> {
        let desc = JoinedFlatTableDesc::from_descriptor(descriptor)?;

        let script = FlatTableScript {
            table_name: target.table_name.to_string(),
            location: target.location.to_string(),
            drop: Self::drop_statement(target.table_name),
            create: Self::create_statement(&desc, target),
            insert: Self::insert_statement(&desc, segment, target)?,
        };

        tracing::debug!(
            target: "flat_table::generate",
            table = %script.table_name,
            columns = desc.columns.len(),
            joins = desc.joins.len(),
            "Generated flat table script"
        );
        Ok(script)
    }
}

fn format_date(segment: &Segment, millis: i64) -> Result<String, FlatTableError> {
    DateTime::from_timestamp_millis(millis)
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .ok_or_else(|| FlatTableError::InvalidDateRange {
            segment: segment.name.clone(),
            start: segment.date_range_start,
            end: segment.date_range_end,
        })
}
