//! Schema introspection for prompt building and diagnostics.
//!
//! The assistant never owns or migrates the schema; it only reads
//! `sqlite_master` and `pragma_table_info` so the prompt can describe
//! the live file.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::error::{QueryError, Result};

/// One column of a user table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub ty: String,
}

/// One user table and its columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
}

impl TableSchema {
    /// Column names joined for prompt text.
    #[must_use]
    pub fn column_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// List the user tables of the database file.
///
/// # Errors
/// Fails when the file cannot be opened read-only.
pub fn introspect(path: &Path) -> Result<Vec<TableSchema>> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(
        |e| QueryError::Open {
            path: path.display().to_string(),
            source: e,
        },
    )?;

    let mut names_stmt = conn.prepare(
        "SELECT name FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )?;
    let names: Vec<String> = names_stmt
        .query_map([], |row| row.get(0))?
        .collect::<std::result::Result<_, rusqlite::Error>>()?;

    let mut columns_stmt =
        conn.prepare("SELECT name, type FROM pragma_table_info(?1) ORDER BY cid")?;
    let mut tables = Vec::with_capacity(names.len());
    for name in names {
        let columns = columns_stmt
            .query_map(rusqlite::params![name], |row| {
                Ok(ColumnInfo {
                    name: row.get(0)?,
                    ty: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<_, rusqlite::Error>>()?;
        tables.push(TableSchema { name, columns });
    }

    Ok(tables)
}

/// The documented `candidates` shape, used for prompting when the file
/// has no user tables to introspect.
#[must_use]
pub fn default_candidates_schema() -> Vec<TableSchema> {
    let columns = [
        ("SrNo", "INTEGER"),
        ("Name", "TEXT"),
        ("ID", "TEXT"),
        ("DOB", "TEXT"),
        ("Category", "TEXT"),
        ("Subject", "TEXT"),
        ("Center", "TEXT"),
        ("Year", "INTEGER"),
    ];
    vec![TableSchema {
        name: "candidates".into(),
        columns: columns
            .into_iter()
            .map(|(name, ty)| ColumnInfo {
                name: name.into(),
                ty: ty.into(),
            })
            .collect(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schema_is_the_documented_candidates_shape() {
        let tables = default_candidates_schema();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name, "candidates");
        assert_eq!(
            tables[0].column_list(),
            "SrNo, Name, ID, DOB, Category, Subject, Center, Year"
        );
    }
}
