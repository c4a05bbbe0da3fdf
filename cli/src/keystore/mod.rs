pub(crate) mod inspect;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum JksCommands {
    /// Inspect the entries of a JKS keystore
    Inspect {
        #[command(flatten)]
        config: inspect::Config,
    },
}
