//! PG Manager - Application entry point
//!
//! Parses the CLI, loads configuration from the environment and runs the
//! selected command (`serve`, `migrate` or `seed`).

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pg_manager::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

/// Log directives used when `RUST_LOG` is unset
const DEFAULT_LOG_DIRECTIVES: &str = "pg_manager=info,tower_http=info,sea_orm=warn";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
        Commands::Seed(args) => commands::seed::execute(args, config).await,
    };

    if let Err(e) = result {
        tracing::error!(code = e.code(), error = ?e, "Command failed");
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
///
/// `--verbose` turns on debug output for this crate and request tracing;
/// otherwise `RUST_LOG` wins over the built-in directives.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pg_manager=debug,tower_http=debug,sea_orm=info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}
