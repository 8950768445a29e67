//! Handlers for the `check` command group.

use std::time::Instant;

use crate::cli::{output, resolve_api_key, ConfigPathArg, DatabaseArgs, LlmCheckArgs};
use crate::config::Config;
use crate::db::schema;
use crate::error::Result;
use crate::llm::{Groq, Llm};

/// Validate the configuration file without running anything.
pub fn config(args: &ConfigPathArg) -> Result<()> {
    println!("Checking configuration: {}", args.config.display());
    println!();

    let config = Config::load(&args.config)?;

    output::ok("Configuration file is valid");
    output::section("Summary");
    output::key_value("Model", &config.llm.model);
    output::key_value("Temperature", config.llm.temperature);
    output::key_value("Database", config.database.path.display());
    output::key_value("Allow writes", config.query.allow_writes);
    output::key_value("Max rows", config.query.max_rows);
    output::key_value("Log level", &config.logging.level);
    println!();

    if config.database.path.exists() {
        output::ok("Database file found");
    } else {
        output::warn("Database file does not exist yet");
        output::note("  vigilo expects a pre-existing SQLite file; it will not create one");
    }

    if std::env::var("GROQ_API_KEY").map(|k| !k.trim().is_empty()) == Ok(true) {
        output::ok("GROQ_API_KEY found in the environment");
    } else {
        output::warn("GROQ_API_KEY is not set");
        output::note("  ask/shell will prompt for a key interactively");
    }

    Ok(())
}

/// Open the database and list its tables.
pub fn database(args: &DatabaseArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(ref database) = args.database {
        config.database.path = database.clone();
    }

    let tables = schema::introspect(&config.database.path)?;

    output::ok("Database opened");
    output::key_value("Path", config.database.path.display());
    output::key_value("Tables", tables.len());

    if tables.is_empty() {
        output::warn("no user tables found");
        output::note("  prompts will fall back to the documented candidates shape");
        return Ok(());
    }

    for table in &tables {
        output::note(&format!(
            "- {} ({} columns)",
            table.name,
            table.columns.len()
        ));
    }

    if tables.iter().any(|t| t.name == "candidates") {
        output::ok("candidates table present");
    }

    Ok(())
}

/// Round-trip a minimal completion against the provider.
pub async fn llm(args: &LlmCheckArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let api_key = resolve_api_key(args.api_key.as_deref(), false)?;
    let client = Groq::from_config(&config.llm, api_key)?;

    let spinner = output::spinner("Contacting provider...");
    let started = Instant::now();
    let reply = client
        .complete(
            "You are a connectivity probe. Reply with the single word OK.",
            "ping",
        )
        .await;
    let elapsed = started.elapsed();

    match reply {
        Ok(reply) => {
            output::spinner_success(&spinner, "Provider reachable");
            output::key_value("Model", &config.llm.model);
            output::key_value("Latency", format!("{} ms", elapsed.as_millis()));
            output::key_value("Reply", reply.trim());
            Ok(())
        }
        Err(e) => {
            output::spinner_fail(&spinner, "Provider unreachable");
            Err(e)
        }
    }
}
