use anyhow::{Result, anyhow};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use sui_config::sui_config_dir;
use sui_sdk::wallet_context::WalletContext;

use crate::utils::constants::{
    DEVNET_RPC_URL, LOCALNET_RPC_URL, MAINNET_RPC_URL, TESTNET_RPC_URL,
};
use crate::types::cooler::CoolerDetails;

/// Operator settings for the Water Cooler CLI.
///
/// Loaded from an optional `watercooler` config file merged with `COOLER_*`
/// environment variables (nested fields use `__`, e.g. `COOLER_COOLER__NAME`).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Network section the id store writes under (default "testnet")
    #[serde(default = "default_network")]
    pub network: String,

    /// Explicit RPC endpoint; falls back to the network's public fullnode
    pub rpc_url: Option<String>,

    /// Water Cooler protocol package
    pub package_id: String,

    /// Shared CoolerFactory object the buy call goes through
    pub cooler_factory_id: String,

    #[serde(default = "default_gas_budget")]
    pub gas_budget: u64,

    /// Directory both object-change snapshots are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Network-scoped id store file
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    pub cooler: CoolerDetails,
}

impl AppConfig {
    pub fn load(path: Option<&str>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let file = match path {
            Some(p) => config::File::with_name(p),
            None => config::File::with_name("watercooler").required(false),
        };

        let cfg = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix("COOLER").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(cfg)
    }

    pub fn rpc_url(&self) -> Result<String> {
        if let Some(url) = &self.rpc_url {
            return Ok(url.clone());
        }

        let url = match self.network.as_str() {
            "testnet" => TESTNET_RPC_URL,
            "mainnet" => MAINNET_RPC_URL,
            "devnet" => DEVNET_RPC_URL,
            "localnet" => LOCALNET_RPC_URL,
            other => {
                return Err(anyhow!(
                    "No default RPC endpoint for network `{other}`; set rpc_url explicitly"
                ));
            }
        };

        Ok(url.to_string())
    }
}

fn default_network() -> String {
    "testnet".to_string()
}

fn default_gas_budget() -> u64 {
    50_000_000
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".outputs")
}

fn default_store_path() -> PathBuf {
    PathBuf::from("objects.json")
}

/// Load wallet context from a Sui client config file
pub fn load_wallet_context(config_path: impl AsRef<Path>) -> Result<WalletContext> {
    let config_path = config_path.as_ref();

    if !config_path.is_file() {
        return Err(anyhow!(
            "Sui client config not found at {}. Run `sui client` once to create it.",
            config_path.display()
        ));
    }

    let wallet =
        WalletContext::new(config_path)?.with_request_timeout(std::time::Duration::from_secs(60));

    Ok(wallet)
}

pub fn default_wallet_config() -> Result<PathBuf> {
    if let Ok(env_path) = std::env::var("SUI_CONFIG") {
        return Ok(PathBuf::from(env_path));
    }

    Ok(sui_config_dir()?.join("client.yaml"))
}
