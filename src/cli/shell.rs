//! Handler for the `shell` command: an interactive question loop.

use dialoguer::{theme::ColorfulTheme, Input};

use crate::cli::{ask, banner, output, resolve_api_key, ShellArgs};
use crate::config::Config;
use crate::error::Result;

/// Execute the shell command.
pub async fn execute(args: &ShellArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;

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

    if !args.no_banner {
        banner::print_banner();
    }

    let api_key = resolve_api_key(args.api_key.as_deref(), true)?;
    let assistant = ask::build_assistant(&config, api_key)?;

    output::key_value("Database", config.database.path.display());
    output::key_value("Model", &config.llm.model);
    output::note("Type a question, or 'exit' to leave.");

    let theme = ColorfulTheme::default();
    loop {
        let line: String = match Input::with_theme(&theme)
            .with_prompt("Ask your query")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // EOF or a closed terminal ends the session.
            Err(_) => break,
        };

        let question = line.trim();
        if question.is_empty() || question == "exit" || question == "quit" {
            break;
        }

        // A failed question is reported and the loop continues.
        if let Err(e) = ask::run_question(&assistant, question, false, false).await {
            output::error(&e.to_string());
        }
    }

    output::note("Bye.");
    Ok(())
}
