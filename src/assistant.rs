//! The question → SQL → result sequence.
//!
//! One struct ties the pieces together so the whole flow runs behind a
//! trait object and can be exercised in tests with a scripted LLM.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::db::executor::{run_statement, QueryOutcome};
use crate::db::guard::QueryPolicy;
use crate::db::schema;
use crate::error::{Error, LlmError, Result};
use crate::llm::Llm;
use crate::prompt::{sanitize_completion, PromptBuilder};

/// A translated question and what its statement produced.
#[derive(Debug)]
pub struct Exchange {
    pub sql: String,
    pub outcome: QueryOutcome,
}

/// Natural-language query assistant over one database file.
pub struct Assistant {
    llm: Arc<dyn Llm>,
    database: PathBuf,
    policy: QueryPolicy,
    max_rows: usize,
}

impl Assistant {
    pub fn new(
        llm: Arc<dyn Llm>,
        database: impl Into<PathBuf>,
        policy: QueryPolicy,
        max_rows: usize,
    ) -> Self {
        Self {
            llm,
            database: database.into(),
            policy,
            max_rows,
        }
    }

    /// Translate a question into a single SQL statement.
    ///
    /// Introspects the live schema first so the prompt matches the file,
    /// and so a missing database fails before any tokens are spent.
    pub async fn translate(&self, question: &str) -> Result<String> {
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::Input("question cannot be empty".into()));
        }

        let mut tables = schema::introspect(&self.database)?;
        if tables.is_empty() {
            tables = schema::default_candidates_schema();
        }
        debug!(tables = tables.len(), provider = self.llm.name(), "requesting translation");

        let builder = PromptBuilder::new(tables);
        let raw = self.llm.complete(&builder.system_prompt(), question).await?;
        let sql = sanitize_completion(&raw);
        if sql.is_empty() {
            return Err(LlmError::EmptyCompletion.into());
        }
        debug!(%sql, "model returned statement");
        Ok(sql)
    }

    /// Execute an already-translated statement under the guard policy.
    pub fn execute(&self, sql: &str) -> Result<QueryOutcome> {
        run_statement(&self.database, sql, &self.policy, self.max_rows)
    }

    /// The full request sequence: translate, then execute.
    pub async fn ask(&self, question: &str) -> Result<Exchange> {
        let sql = self.translate(question).await?;
        let outcome = self.execute(&sql)?;
        Ok(Exchange { sql, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testkit::MockLlm;

    #[test]
    fn empty_question_is_rejected_before_any_call() {
        let llm = Arc::new(MockLlm::new("SELECT 1"));
        let assistant = Assistant::new(llm.clone(), "missing.db", QueryPolicy::read_only(), 500);
        let err = tokio_test::block_on(assistant.translate("   "))
            .expect_err("empty question should fail");
        assert!(err.to_string().contains("question cannot be empty"));
        assert!(llm.prompts().is_empty());
    }
}
