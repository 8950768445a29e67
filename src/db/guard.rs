//! Statement guard for model-generated SQL.
//!
//! Generated statements are classified by their first keyword and checked
//! against an allow-list before anything reaches the database. Reads are
//! allowed by default, writes only when opted in, and DDL, PRAGMA, ATTACH
//! and multi-statement input are always refused.

use std::fmt;

use crate::error::QueryError;

/// Statement classification by leading keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    With,
    Explain,
    Insert,
    Update,
    Delete,
    Ddl,
    Pragma,
    Attach,
    Vacuum,
    Other,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatementKind::Select => "SELECT",
            StatementKind::With => "WITH",
            StatementKind::Explain => "EXPLAIN",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
            StatementKind::Ddl => "DDL",
            StatementKind::Pragma => "PRAGMA",
            StatementKind::Attach => "ATTACH",
            StatementKind::Vacuum => "VACUUM",
            StatementKind::Other => "unrecognized",
        };
        f.write_str(name)
    }
}

/// Classify a statement by its first keyword.
pub fn classify(sql: &str) -> StatementKind {
    let keyword = sql
        .trim_start()
        .split(|c: char| !c.is_ascii_alphabetic())
        .next()
        .unwrap_or("")
        .to_ascii_uppercase();

    match keyword.as_str() {
        "SELECT" => StatementKind::Select,
        "WITH" => StatementKind::With,
        "EXPLAIN" => StatementKind::Explain,
        "INSERT" | "REPLACE" => StatementKind::Insert,
        "UPDATE" => StatementKind::Update,
        "DELETE" => StatementKind::Delete,
        "CREATE" | "DROP" | "ALTER" => StatementKind::Ddl,
        "PRAGMA" => StatementKind::Pragma,
        "ATTACH" | "DETACH" => StatementKind::Attach,
        "VACUUM" | "REINDEX" => StatementKind::Vacuum,
        _ => StatementKind::Other,
    }
}

/// Allow-list policy applied before execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryPolicy {
    pub allow_writes: bool,
}

impl QueryPolicy {
    /// SELECT / WITH / EXPLAIN only.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            allow_writes: false,
        }
    }

    /// Additionally permit INSERT / UPDATE / DELETE.
    #[must_use]
    pub fn with_writes() -> Self {
        Self { allow_writes: true }
    }

    /// Check a statement against this policy.
    ///
    /// # Errors
    /// Returns [`QueryError::Refused`] with the offending SQL when the
    /// statement falls outside the allow-list.
    pub fn check(&self, sql: &str) -> std::result::Result<StatementKind, QueryError> {
        let trimmed = sql.trim();
        if trimmed.is_empty() {
            return Err(refused(sql, "empty statement"));
        }
        if has_multiple_statements(trimmed) {
            return Err(refused(sql, "multiple statements are not allowed"));
        }

        let kind = classify(trimmed);
        match kind {
            StatementKind::Select | StatementKind::With | StatementKind::Explain => Ok(kind),
            StatementKind::Insert | StatementKind::Update | StatementKind::Delete => {
                if self.allow_writes {
                    Ok(kind)
                } else {
                    Err(refused(
                        sql,
                        &format!("{kind} requires writes to be enabled (--allow-writes)"),
                    ))
                }
            }
            StatementKind::Ddl
            | StatementKind::Pragma
            | StatementKind::Attach
            | StatementKind::Vacuum
            | StatementKind::Other => {
                Err(refused(sql, &format!("{kind} statements are not allowed")))
            }
        }
    }
}

fn refused(sql: &str, reason: &str) -> QueryError {
    QueryError::Refused {
        sql: sql.to_string(),
        reason: reason.to_string(),
    }
}

/// Detect a second statement after a quote-aware semicolon.
fn has_multiple_statements(sql: &str) -> bool {
    let mut in_single = false;
    let mut in_double = false;
    for (i, ch) in sql.char_indices() {
        match ch {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            ';' if !in_single && !in_double => {
                if sql[i + 1..].chars().any(|c| !c.is_whitespace()) {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_leading_keyword() {
        assert_eq!(classify("SELECT * FROM candidates"), StatementKind::Select);
        assert_eq!(classify("  select 1"), StatementKind::Select);
        assert_eq!(classify("WITH t AS (SELECT 1) SELECT * FROM t"), StatementKind::With);
        assert_eq!(classify("EXPLAIN SELECT 1"), StatementKind::Explain);
        assert_eq!(classify("INSERT INTO candidates VALUES (1)"), StatementKind::Insert);
        assert_eq!(classify("update candidates set Year = 2022"), StatementKind::Update);
        assert_eq!(classify("DELETE FROM candidates"), StatementKind::Delete);
        assert_eq!(classify("DROP TABLE candidates"), StatementKind::Ddl);
        assert_eq!(classify("CREATE TABLE t (x)"), StatementKind::Ddl);
        assert_eq!(classify("PRAGMA table_info(candidates)"), StatementKind::Pragma);
        assert_eq!(classify("ATTACH DATABASE 'x' AS y"), StatementKind::Attach);
        assert_eq!(classify("VACUUM"), StatementKind::Vacuum);
        assert_eq!(classify("GRANT ALL"), StatementKind::Other);
    }

    #[test]
    fn read_only_accepts_reads() {
        let policy = QueryPolicy::read_only();
        assert!(policy.check("SELECT COUNT(*) FROM candidates;").is_ok());
        assert!(policy.check("WITH t AS (SELECT 1) SELECT * FROM t").is_ok());
        assert!(policy.check("EXPLAIN SELECT 1").is_ok());
    }

    #[test]
    fn read_only_refuses_writes() {
        let policy = QueryPolicy::read_only();
        let err = policy
            .check("DELETE FROM candidates")
            .expect_err("write should be refused");
        assert!(err.to_string().contains("--allow-writes"));
    }

    #[test]
    fn writes_policy_accepts_dml_but_not_ddl() {
        let policy = QueryPolicy::with_writes();
        assert!(policy.check("INSERT INTO candidates VALUES (1)").is_ok());
        assert!(policy.check("UPDATE candidates SET Year = 2022").is_ok());
        assert!(policy.check("DROP TABLE candidates").is_err());
        assert!(policy.check("CREATE TABLE t (x)").is_err());
    }

    #[test]
    fn pragma_attach_vacuum_always_refused() {
        let policy = QueryPolicy::with_writes();
        assert!(policy.check("PRAGMA writable_schema = 1").is_err());
        assert!(policy.check("ATTACH DATABASE '/etc/x' AS y").is_err());
        assert!(policy.check("VACUUM").is_err());
    }

    #[test]
    fn trailing_semicolon_is_a_single_statement() {
        assert!(!has_multiple_statements("SELECT 1;"));
        assert!(!has_multiple_statements("SELECT 1;  \n"));
    }

    #[test]
    fn second_statement_is_detected() {
        assert!(has_multiple_statements("SELECT 1; DROP TABLE candidates"));
        let policy = QueryPolicy::read_only();
        let err = policy
            .check("SELECT 1; DROP TABLE candidates;")
            .expect_err("multi-statement input should be refused");
        assert!(err.to_string().contains("multiple statements"));
    }

    #[test]
    fn semicolon_inside_string_literal_is_not_a_separator() {
        assert!(!has_multiple_statements(
            "SELECT * FROM candidates WHERE Name = 'a;b'"
        ));
        assert!(!has_multiple_statements(
            "SELECT * FROM candidates WHERE Name = \"a;b\""
        ));
    }

    #[test]
    fn empty_statement_refused() {
        let policy = QueryPolicy::read_only();
        assert!(policy.check("").is_err());
        assert!(policy.check("   \n").is_err());
    }
}
