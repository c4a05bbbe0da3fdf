use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod keystore;
mod load;
mod output;
mod utils;

use error::Result;

use keystore::JksCommands;

const LOG_ENV: &str = "KEYLOOM_LOG";

#[derive(Parser)]
#[command(name = "keyloom")]
#[command(about = "TLS key material loader and keystore inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// JKS keystore operations
    Jks {
        #[command(subcommand)]
        command: JksCommands,
    },
    /// Load keys and certificates the way a TLS endpoint would
    Load {
        #[command(flatten)]
        config: load::Config,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Jks { command } => match command {
            JksCommands::Inspect { config } => {
                keystore::inspect::execute(config)?;
            }
        },
        Commands::Load { config } => {
            load::execute(config)?;
        }
    }

    Ok(())
}
