use clouddns::{Api, ApiConnection};
use eyre::{Result, WrapErr};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;

use args::Args;
use commands::Subcommand;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup traceback
    if std::env::var("RUST_SPANTRACE").is_err() {
        std::env::set_var("RUST_SPANTRACE", "0");
    }
    color_eyre::install()?;

    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse the CLI
    let cli = Args::from_args();

    // Build the API connection
    let connection = ApiConnection::new(&Api {
        endpoint: cli.endpoint,
        token: cli.token,
    })
    .wrap_err("failed to build connection")?;

    cli.cmd.subcommand().execute(cli.project, connection).await?;

    Ok(())
}
