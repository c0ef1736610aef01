use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use services::catalog::Catalog;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so --json output on stdout stays machine-parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("opsadvisor=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = Catalog::new();
    commands::handle_runtime_commands(&cli, &catalog)
}
