//! Handlers for the `config` command group.

use std::fs;

use crate::cli::{output, ConfigPathArg, InitArgs};
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../config.toml.example");

/// Execute `config init`.
pub fn init(args: &InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    fs::write(&args.path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::ok("Created configuration file");
    output::key_value("Path", args.path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", args.path.display()));
    output::note("2. Set the GROQ_API_KEY environment variable");
    output::note(&format!(
        "3. Run: vigilo check config -c {}",
        args.path.display()
    ));
    output::note("4. Run: vigilo ask \"How many records are in the table?\"");
    Ok(())
}

/// Execute `config show`.
pub fn show(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;

    output::section("Effective Configuration");
    output::key_value("Path", args.config.display());

    output::section("LLM");
    output::key_value("Model", &config.llm.model);
    output::key_value("Temperature", config.llm.temperature);
    output::key_value("Max tokens", config.llm.max_tokens);
    output::key_value("Timeout", format!("{}s", config.llm.timeout_secs));

    output::section("Database");
    output::key_value("Path", config.database.path.display());

    output::section("Query");
    output::key_value("Allow writes", config.query.allow_writes);
    output::key_value("Max rows", config.query.max_rows);

    output::section("Logging");
    output::key_value("Level", &config.logging.level);
    output::key_value("Format", &config.logging.format);

    println!();
    Ok(())
}
