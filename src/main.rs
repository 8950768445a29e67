use clap::Parser;

use vigilo::cli::{self, CheckCommand, Cli, Commands, ConfigCommand};
use vigilo::error::{ConfigError, Error};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = dispatch(cli).await {
        report(&error);
        std::process::exit(1);
    }
}

async fn dispatch(cli: Cli) -> Result<(), Error> {
    match cli.command {
        Commands::Ask(args) => cli::ask::execute(&args).await,
        Commands::Shell(args) => cli::shell::execute(&args).await,
        Commands::Schema(args) => cli::schema_cmd::execute(&args),
        Commands::Check(command) => match command {
            CheckCommand::Config(args) => cli::check::config(&args),
            CheckCommand::Database(args) => cli::check::database(&args),
            CheckCommand::Llm(args) => cli::check::llm(&args).await,
        },
        Commands::Config(command) => match command {
            ConfigCommand::Init(args) => cli::config_cmd::init(&args),
            ConfigCommand::Show(args) => cli::config_cmd::show(&args),
        },
    }
}

fn report(error: &Error) {
    // TOML parse failures carry a span; render those with miette.
    if let Error::Config(ConfigError::Parse { source, content }) = error {
        let diagnostic = cli::diagnostic::ConfigDiagnostic::from_toml(source, content);
        eprintln!("{:?}", miette::Report::new(diagnostic));
        return;
    }
    cli::output::error(&error.to_string());
}
