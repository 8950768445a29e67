//! Handler for the `ask` command.

use std::io::IsTerminal;
use std::sync::Arc;

use dialoguer::{theme::ColorfulTheme, Input};
use serde_json::json;

use crate::assistant::Assistant;
use crate::cli::{output, resolve_api_key, AskArgs};
use crate::config::Config;
use crate::db::executor::QueryOutcome;
use crate::db::guard::QueryPolicy;
use crate::error::{Error, Result};
use crate::llm::{Groq, Llm};

/// Execute the ask command.
pub async fn execute(args: &AskArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(ref model) = args.model {
        config.llm.model = model.clone();
    }
    if let Some(ref database) = args.database {
        config.database.path = database.clone();
    }
    if args.allow_writes {
        config.query.allow_writes = true;
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }

    config.init_logging();

    let question = match args.question.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => q.to_string(),
        _ => prompt_question(args.json)?,
    };

    let api_key = resolve_api_key(args.api_key.as_deref(), !args.json)?;
    let assistant = build_assistant(&config, api_key)?;

    run_question(&assistant, &question, args.sql_only, args.json).await
}

/// Ask for the question interactively, or fail when that is impossible.
fn prompt_question(json: bool) -> Result<String> {
    if !json && std::io::stdin().is_terminal() {
        let question: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Ask your query")
            .interact_text()?;
        let question = question.trim().to_string();
        if !question.is_empty() {
            return Ok(question);
        }
    }
    Err(Error::Input("question cannot be empty".into()))
}

/// Wire an [`Assistant`] from effective configuration and an API key.
pub(crate) fn build_assistant(config: &Config, api_key: String) -> Result<Assistant> {
    let llm: Arc<dyn Llm> = Arc::new(Groq::from_config(&config.llm, api_key)?);
    let policy = if config.query.allow_writes {
        QueryPolicy::with_writes()
    } else {
        QueryPolicy::read_only()
    };
    Ok(Assistant::new(
        llm,
        &config.database.path,
        policy,
        config.query.max_rows,
    ))
}

/// The one request/response sequence, shared by `ask` and `shell`.
pub(crate) async fn run_question(
    assistant: &Assistant,
    question: &str,
    sql_only: bool,
    json: bool,
) -> Result<()> {
    let spinner = if json {
        None
    } else {
        Some(output::spinner("Generating SQL query..."))
    };

    let sql = match assistant.translate(question).await {
        Ok(sql) => {
            if let Some(pb) = &spinner {
                output::spinner_success(pb, "SQL generated");
            }
            sql
        }
        Err(e) => {
            if let Some(pb) = &spinner {
                output::spinner_fail(pb, "translation failed");
            }
            return Err(e);
        }
    };

    if !json {
        output::section("Generated SQL");
        output::sql(&sql);
    }

    if sql_only {
        if json {
            println!("{}", json!({ "sql": sql }));
        }
        return Ok(());
    }

    let outcome = assistant.execute(&sql)?;
    match (&outcome, json) {
        (QueryOutcome::Rows(result), false) => {
            output::section("Query Result");
            output::result_table(result);
        }
        (QueryOutcome::Affected(rows), false) => {
            output::section("Query Result");
            output::affected(*rows);
        }
        (QueryOutcome::Rows(result), true) => {
            println!(
                "{}",
                json!({
                    "sql": sql,
                    "columns": result.columns,
                    "rows": result.rows,
                    "truncated": result.truncated,
                })
            );
        }
        (QueryOutcome::Affected(rows), true) => {
            println!("{}", json!({ "sql": sql, "rows_affected": rows }));
        }
    }

    Ok(())
}
