use anyhow::Result;
use sui_sdk::SuiClient;
use tracing::{info, warn};

use crate::{
    client::client_ext::SuiClientExt,
    store::id_store::IdStore,
    transactions::warehouse::stock_warehouse_tx,
    utils::config::{AppConfig, default_wallet_config, load_wallet_context},
    utils::constants::{
        DIGEST_STOCK, MINT_ADMIN_CAP_ID_KEY, MINT_WAREHOUSE_ID_KEY, NFT_IDS_KEY,
        STOCK_SNAPSHOT_FILE, WATER_COOLER_ID_KEY,
    },
    utils::handle_response,
    utils::snapshot::write_snapshot,
};

pub async fn execute(client: &SuiClient, cfg: &AppConfig) -> Result<()> {
    println!("Stocking Water Cooler with NFTs now");

    let mut store = IdStore::open(&cfg.store_path)?;

    let nft_ids = store.id_array(&cfg.network, NFT_IDS_KEY)?;
    if nft_ids.is_empty() {
        warn!("NFT id list is empty; the move call will carry an empty vector");
    }

    let cooler_id = store.required_id(&cfg.network, WATER_COOLER_ID_KEY)?;
    let admin_cap_id = store.required_id(&cfg.network, MINT_ADMIN_CAP_ID_KEY)?;
    let warehouse_id = store.required_id(&cfg.network, MINT_WAREHOUSE_ID_KEY)?;

    let default_path = default_wallet_config()?;
    let mut wallet = load_wallet_context(default_path)?;
    let sender = wallet.active_address()?;

    info!("Adding {} NFTs to warehouse {}", nft_ids.len(), warehouse_id);

    let tx_data = stock_warehouse_tx(
        client,
        sender,
        cfg,
        admin_cap_id,
        cooler_id,
        &nft_ids,
        warehouse_id,
    )
    .await?;

    let resp = client.sign_and_execute_tx(tx_data, wallet).await?;
    handle_response(&resp);

    let digest = resp.digest;
    let changes = client.wait_for_object_changes(digest).await?;

    store.record_digest(DIGEST_STOCK, &digest.to_string())?;

    let path = write_snapshot(&cfg.output_dir, STOCK_SNAPSHOT_FILE, &changes)?;
    info!("Object change snapshot written to {}", path.display());

    println!("The Water Cooler has been stocked.");

    Ok(())
}
