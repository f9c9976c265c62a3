//! Priorauth CLI - Track prior authorization prerequisites and check their consistency

use clap::Parser;
use priorauth::cli::{Cli, Commands};
use priorauth::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG overrides the flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> priorauth::Result<()> {
    let cwd = priorauth::fs::resolve_cwd(cli.cwd.as_deref());
    let config = priorauth::config::load_config(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Some(Commands::Items { json }) => {
            priorauth::cli::commands::items::run(json || config.json).await
        }
        Some(Commands::Rules { json }) => {
            priorauth::cli::commands::rules::run(json || config.json).await
        }
        Some(Commands::Check { done, json }) => {
            priorauth::cli::commands::check::run(&done, json || config.json).await
        }
        Some(Commands::Session) => {
            priorauth::cli::commands::session::run(&config, cli.dry_run).await
        }
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
