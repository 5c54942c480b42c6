use crate::engine::metadata::{CubeDescriptor, JoinDesc, JoinType};

use super::FlatTableError;

pub const FACT_TABLE_ALIAS: &str = "FACT_TABLE";
pub const LOOKUP_TABLE_ALIAS_PREFIX: &str = "LOOKUP_";

/// One column of the flattened table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatColumn {
    pub table_alias: String,
    pub column: String,
    /// Column name in the flattened table
    pub alias: String,
}

impl FlatColumn {
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.table_alias, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatJoin {
    pub table: String,
    pub alias: String,
    pub join_type: JoinType,
    /// `(fact column, lookup column)` pairs
    pub keys: Vec<(String, String)>,
}

/// Denormalized view of a cube: the fact table joined with its lookup tables, projected
/// onto the row-key and measure columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedFlatTableDesc {
    pub fact_table: String,
    pub joins: Vec<FlatJoin>,
    pub columns: Vec<FlatColumn>,
    pub partition_column: Option<String>,
}

impl JoinedFlatTableDesc {
    pub fn from_descriptor(descriptor: &CubeDescriptor) -> Result<Self, FlatTableError> {
        let joins = descriptor
            .dimensions
            .iter()
            .filter_map(|d| d.join.as_ref().map(|join| (d, join)))
            .enumerate()
            .map(|(i, (dimension, join))| {
                Ok(FlatJoin {
                    table: dimension.table.clone(),
                    alias: format!("{LOOKUP_TABLE_ALIAS_PREFIX}{}", i + 1),
                    join_type: join.join_type,
                    keys: join_keys(&dimension.table, join)?,
                })
            })
            .collect::<Result<Vec<_>, FlatTableError>>()?;

        let mut columns: Vec<FlatColumn> = Vec::new();
        let mut push = |table: Option<&str>, column: &str| -> Result<(), FlatTableError> {
            let (table_name, table_alias) = match table {
                Some(t) if !t.eq_ignore_ascii_case(&descriptor.fact_table) => {
                    let join = joins
                        .iter()
                        .find(|j| j.table.eq_ignore_ascii_case(t))
                        .ok_or_else(|| FlatTableError::UnknownTable {
                            table: t.to_string(),
                            column: column.to_string(),
                        })?;
                    (join.table.as_str(), join.alias.as_str())
                }
                _ => (descriptor.fact_table.as_str(), FACT_TABLE_ALIAS),
            };

            if columns
                .iter()
                .any(|c| c.table_alias == table_alias && c.column.eq_ignore_ascii_case(column))
            {
                return Ok(());
            }
            columns.push(FlatColumn {
                table_alias: table_alias.to_string(),
                column: column.to_string(),
                alias: column_alias(table_name, column),
            });
            Ok(())
        };

        for rowkey in &descriptor.rowkey.columns {
            push(rowkey.table.as_deref(), &rowkey.column)?;
        }
        for measure in &descriptor.measures {
            if let Some(column) = &measure.column {
                push(None, column)?;
            }
        }

        if columns.is_empty() {
            return Err(FlatTableError::NoColumns(descriptor.fact_table.clone()));
        }

        Ok(Self {
            fact_table: descriptor.fact_table.clone(),
            joins,
            columns,
            partition_column: descriptor.partition_column.clone(),
        })
    }
}

fn join_keys(table: &str, join: &JoinDesc) -> Result<Vec<(String, String)>, FlatTableError> {
    if join.primary_key.is_empty() || join.primary_key.len() != join.foreign_key.len() {
        return Err(FlatTableError::JoinKeyMismatch {
            table: table.to_string(),
            primary: join.primary_key.len(),
            foreign: join.foreign_key.len(),
        });
    }
    Ok(join
        .foreign_key
        .iter()
        .cloned()
        .zip(join.primary_key.iter().cloned())
        .collect())
}

/// `DB.TABLE` + `COL` -> `TABLE_COL`
fn column_alias(table: &str, column: &str) -> String {
    let table = table.rsplit('.').next().unwrap_or(table);
    format!("{table}_{column}").to_ascii_uppercase()
}
