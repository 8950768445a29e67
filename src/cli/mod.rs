//! Command-line interface definitions.

pub mod ask;
pub mod banner;
pub mod check;
pub mod config_cmd;
pub mod diagnostic;
pub mod output;
pub mod schema_cmd;
pub mod shell;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Password};

use crate::error::{LlmError, Result};

/// Vigilo - translate plain-language questions into SQL and run them.
#[derive(Parser, Debug)]
#[command(name = "vigilo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask one question and show the generated SQL and its result
    Ask(AskArgs),

    /// Interactive question loop
    Shell(ShellArgs),

    /// Show the tables and columns of the database
    Schema(DatabaseArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `vigilo check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file
    Config(ConfigPathArg),
    /// Open the database and list its tables
    Database(DatabaseArgs),
    /// Round-trip a minimal completion against the provider
    Llm(LlmCheckArgs),
}

/// Subcommands for `vigilo config`
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a commented configuration template
    Init(InitArgs),
    /// Print the effective configuration
    Show(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for commands that touch the database.
#[derive(Parser, Debug)]
pub struct DatabaseArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the database file
    #[arg(short, long)]
    pub database: Option<PathBuf>,
}

/// Arguments for the `ask` subcommand.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// Natural-language question (prompted for interactively when omitted)
    pub question: Option<String>,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// API key (falls back to GROQ_API_KEY, then an interactive prompt)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the database file
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Override the model name
    #[arg(long)]
    pub model: Option<String>,

    /// Permit INSERT / UPDATE / DELETE statements
    #[arg(long)]
    pub allow_writes: bool,

    /// Show the generated SQL without executing it
    #[arg(long)]
    pub sql_only: bool,

    /// Emit a single JSON object instead of styled text
    #[arg(long)]
    pub json: bool,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Arguments for the `shell` subcommand.
#[derive(Parser, Debug)]
pub struct ShellArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// API key (falls back to GROQ_API_KEY, then an interactive prompt)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the database file
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Override the model name
    #[arg(long)]
    pub model: Option<String>,

    /// Permit INSERT / UPDATE / DELETE statements
    #[arg(long)]
    pub allow_writes: bool,

    /// Skip ASCII art banner
    #[arg(long)]
    pub no_banner: bool,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Arguments for `check llm`.
#[derive(Parser, Debug)]
pub struct LlmCheckArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// API key (falls back to GROQ_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the configuration file
    #[arg(default_value = "config.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Resolve the API key: flag, then environment, then (when the session
/// is interactive) a masked prompt.
pub(crate) fn resolve_api_key(flag: Option<&str>, interactive: bool) -> Result<String> {
    if let Some(key) = flag {
        let key = key.trim();
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    if let Ok(key) = std::env::var("GROQ_API_KEY") {
        let key = key.trim().to_string();
        if !key.is_empty() {
            return Ok(key);
        }
    }

    if interactive && std::io::stdin().is_terminal() {
        let key = Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your Groq API key")
            .interact()?;
        let key = key.trim().to_string();
        if !key.is_empty() {
            return Ok(key);
        }
    }

    Err(LlmError::MissingApiKey.into())
}
