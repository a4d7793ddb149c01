pub mod buy;
pub mod stock;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sui_sdk::SuiClient;

use crate::utils::config::AppConfig;

#[derive(Parser)]
#[command(name = "watercooler")]
#[command(about = "Operator CLI for the Water Cooler NFT protocol", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// RPC URL, overriding the configured network's default
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,

    /// Path to the application config file
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Buy a Water Cooler from the factory
    Buy {
        /// Skip the interactive confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Stock the mint warehouse with the recorded NFTs
    Stock,
}

impl Commands {
    pub async fn execute(self, client: &SuiClient, cfg: &AppConfig) -> Result<()> {
        match self {
            Commands::Buy { yes } => buy::execute(client, cfg, yes).await,
            Commands::Stock => stock::execute(client, cfg).await,
        }
    }
}
