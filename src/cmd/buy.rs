use anyhow::Result;
use serde_json::Value;
use std::io::{self, Write};
use sui_sdk::SuiClient;
use sui_types::base_types::ObjectID;
use tracing::{info, warn};

use crate::{
    client::client_ext::SuiClientExt,
    store::id_store::IdStore,
    transactions::factory::buy_water_cooler_tx,
    utils::changes::find_object_id,
    utils::config::{AppConfig, default_wallet_config, load_wallet_context},
    utils::constants::{BUY_SNAPSHOT_FILE, DIGEST_BUY, TRACKED_OBJECTS},
    utils::snapshot::write_snapshot,
    utils::{handle_response, mist_to_sui},
};

pub async fn execute(client: &SuiClient, cfg: &AppConfig, yes: bool) -> Result<()> {
    let mut store = IdStore::open(&cfg.store_path)?;

    let factory_id = ObjectID::from_hex_literal(&cfg.cooler_factory_id)?;
    let price = client.get_cooler_price(factory_id).await?;

    if !yes {
        let answer = prompt(&format!(
            "You are about to buy a Water Cooler for {} $SUI. To confirm type y or n to cancel: ",
            mist_to_sui(price)
        ))?;

        if !confirmed(&answer) {
            println!("Buy order canceled.");
            return Ok(());
        }
    }

    println!("Ordering Water Cooler now.");

    let default_path = default_wallet_config()?;
    let mut wallet = load_wallet_context(default_path)?;
    let sender = wallet.active_address()?;

    let tx_data = buy_water_cooler_tx(client, sender, cfg, price).await?;

    println!("Shipping... Your Water Cooler will arrive soon");

    let resp = client.sign_and_execute_tx(tx_data, wallet).await?;
    handle_response(&resp);

    let digest = resp.digest;
    let changes = client.wait_for_object_changes(digest).await?;

    store.record_digest(DIGEST_BUY, &digest.to_string())?;

    let object_changes = changes.object_changes.as_deref().unwrap_or(&[]);
    for (key, type_suffix) in TRACKED_OBJECTS {
        match find_object_id(object_changes, type_suffix) {
            Some(id) => store.update(&cfg.network, key, id.to_string())?,
            None => {
                warn!(
                    "no object matching {} in transaction {}; recording null for `{}`",
                    type_suffix, digest, key
                );
                store.update(&cfg.network, key, Value::Null)?;
            }
        }
    }

    let path = write_snapshot(&cfg.output_dir, BUY_SNAPSHOT_FILE, &changes)?;
    info!("Object change snapshot written to {}", path.display());

    println!("Your Water Cooler has arrived.");

    Ok(())
}

/// Only the literal `y` confirms; everything else cancels the order.
fn confirmed(answer: &str) -> bool {
    answer.trim_end_matches(['\r', '\n']) == "y"
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(answer)
}
