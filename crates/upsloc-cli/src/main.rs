mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::search::SearchArgs;

#[derive(Debug, Parser)]
#[command(name = "upsloc-cli")]
#[command(about = "UPS Locator command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for locations around an origin address
    Search(SearchArgs),
    /// Print the LocatorRequest document without submitting it
    Render(SearchArgs),
}

/// Initialise the global subscriber, preferring `RUST_LOG` over `fallback`.
///
/// Logs go to stderr so stdout carries only command output.
fn init_tracing(fallback: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => {
            let config = upsloc_core::load_app_config_from_env()?;
            init_tracing(&config.log_level)?;
            search::run_search(&config, &args).await?;
        }
        Commands::Render(args) => {
            init_tracing("warn")?;
            search::run_render(&args)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
