use anyhow::Result;
use clap::Parser;
use sui_sdk::SuiClientBuilder;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;
use watercooler::cmd::Cli;
use watercooler::utils::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cfg = AppConfig::load(cli.config.as_deref())?;

    let rpc_url = match cli.rpc_url {
        Some(url) => url,
        None => cfg.rpc_url()?,
    };

    info!("Connecting to Sui RPC: {}", rpc_url);

    let client = SuiClientBuilder::default().build(&rpc_url).await?;

    cli.command.execute(&client, &cfg).await
}
