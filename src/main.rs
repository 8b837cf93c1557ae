//! `contact-api` binary.
//!
//! `contact-api serve` applies pending migrations and serves the HTTP API
//! until Ctrl+C or SIGTERM; `contact-api migrate <action>` manages the schema
//! by hand. Settings come from the environment (and `.env`), see `Config`.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use contact_api::{
    cli::{Cli, Commands},
    commands,
    config::Config,
    AppResult,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command, Config::from_env()).await {
        tracing::error!(error = ?e, "contact-api exited with an error");
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: Config) -> AppResult<()> {
    match command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
    }
}

/// `--verbose` forces `debug`; otherwise `RUST_LOG`, defaulting to `info`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}
