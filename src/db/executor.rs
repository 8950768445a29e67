//! Statement execution against the SQLite file.
//!
//! Each call opens a fresh connection, runs exactly one statement, and
//! closes the connection on drop. Result shapes are not known ahead of
//! time (the model writes the SELECT list), so rows are captured
//! dynamically from the statement's column metadata.

use std::path::Path;
use std::time::Duration;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::db::guard::QueryPolicy;
use crate::error::{QueryError, Result};

/// Captured rows from a read statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// True when more rows existed than the display cap.
    pub truncated: bool,
}

/// What a statement produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Rows(ResultSet),
    Affected(usize),
}

/// Run one guarded statement against the database file.
///
/// # Errors
/// Fails when the policy refuses the statement, the file cannot be
/// opened, or SQLite rejects the statement.
pub fn run_statement(
    path: &Path,
    sql: &str,
    policy: &QueryPolicy,
    max_rows: usize,
) -> Result<QueryOutcome> {
    let kind = policy.check(sql)?;
    debug!(%kind, "executing statement");

    let conn = open_existing(path)?;
    let execute_err = |e: rusqlite::Error| QueryError::Execute {
        sql: sql.to_string(),
        source: e,
    };

    let mut stmt = conn.prepare(sql).map_err(execute_err)?;

    if stmt.column_count() == 0 {
        let affected = stmt.execute([]).map_err(execute_err)?;
        debug!(affected, "write statement finished");
        return Ok(QueryOutcome::Affected(affected));
    }

    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

    let mut rows = stmt.query([]).map_err(execute_err)?;
    let mut captured = Vec::new();
    let mut truncated = false;
    while let Some(row) = rows.next().map_err(execute_err)? {
        if captured.len() >= max_rows {
            truncated = true;
            break;
        }
        let mut record = Vec::with_capacity(columns.len());
        for idx in 0..columns.len() {
            let value = row.get_ref(idx).map_err(execute_err)?;
            record.push(render_value(value));
        }
        captured.push(record);
    }

    debug!(rows = captured.len(), truncated, "read statement finished");
    Ok(QueryOutcome::Rows(ResultSet {
        columns,
        rows: captured,
        truncated,
    }))
}

/// Open the database file read-write without creating it.
///
/// The assistant assumes a pre-existing file; a missing path is an error
/// rather than an invitation to create an empty database.
pub(crate) fn open_existing(path: &Path) -> std::result::Result<Connection, QueryError> {
    let open_err = |e: rusqlite::Error| QueryError::Open {
        path: path.display().to_string(),
        source: e,
    };

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(open_err)?;
    conn.busy_timeout(Duration::from_millis(5000))
        .map_err(open_err)?;
    Ok(conn)
}

fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(text) => String::from_utf8_lossy(text).into_owned(),
        ValueRef::Blob(blob) => format!("<{} byte blob>", blob.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_sqlite_values_as_display_text() {
        assert_eq!(render_value(ValueRef::Null), "NULL");
        assert_eq!(render_value(ValueRef::Integer(42)), "42");
        assert_eq!(render_value(ValueRef::Real(1.5)), "1.5");
        assert_eq!(render_value(ValueRef::Text(b"OBC")), "OBC");
        assert_eq!(render_value(ValueRef::Blob(&[0, 1, 2])), "<3 byte blob>");
    }
}
