//! The `oc` binary: argument parsing, logging, and the chat loop.

mod error;
mod render;
mod repl;

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use oc_config::Config;
use oc_conversation::{ApiKey, Session};
use tracing::trace;

use crate::error::Result;

/// OpsChat, a terminal chat assistant for IT administration.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Send a single query, print the reply, and exit.
    ///
    /// Without a query, an interactive chat session is started.
    query: Vec<String>,

    #[command(flatten, next_help_heading = "Global Options")]
    globals: Globals,
}

#[derive(Debug, clap::Args)]
pub struct Globals {
    /// Override a configuration value for the duration of the run.
    #[arg(short, long, value_name = "KEY=VALUE", action = ArgAction::Append)]
    config: Vec<String>,

    /// Increase verbosity of logging.
    ///
    /// Can be specified multiple times to increase verbosity.
    ///
    /// Defaults to printing "error" messages. For each increase in verbosity,
    /// the log level is set to "warn", "info", "debug", and "trace"
    /// respectively.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output.
    #[arg(short, long)]
    quiet: bool,

    /// Disable color in the output.
    #[arg(long = "no-color", alias = "no-colors")]
    no_color: bool,
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    configure_logging(cli.globals.verbose, cli.globals.quiet);

    if cli.globals.no_color {
        crossterm::style::force_color_output(false);
    }

    match run_inner(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run_inner(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    apply_cli_configs(&cli.globals.config, &mut config)?;

    let mut session = Session::new(config.assistant.parameters.clone());
    if let Some(api_key) = credential_from_env(&config.assistant.api_key_env) {
        trace!(var = %config.assistant.api_key_env, "Using API key from the environment.");
        session.set_api_key(api_key);
    }

    if cli.query.is_empty() {
        repl::run(session, config).await
    } else {
        repl::one_shot(session, &config, &cli.query.join(" ")).await
    }
}

/// Read the credential from the configured environment variable.
///
/// The key only ever lives in session memory. It is not part of the
/// configuration and never written to disk.
fn credential_from_env(var: &str) -> Option<ApiKey> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(ApiKey::new)
}

/// Apply CLI `--config KEY=VALUE` overrides.
fn apply_cli_configs(overrides: &[String], config: &mut Config) -> Result<()> {
    for field in overrides {
        let (key, value) = field.split_once('=').unwrap_or((field.as_str(), ""));
        config.set(key, value)?;
    }

    Ok(())
}

fn configure_logging(verbose: u8, quiet: bool) {
    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::fmt;

    let mut level = match verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    if quiet {
        level = LevelFilter::OFF;
    }

    fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
