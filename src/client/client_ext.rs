use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use shared_crypto::intent::Intent;
use std::time::Duration;
use sui_json_rpc_types::{
    SuiObjectDataOptions, SuiParsedData, SuiTransactionBlockResponse,
    SuiTransactionBlockResponseOptions,
};
use sui_keys::key_identity::KeyIdentity;
use sui_sdk::{SuiClient, types::transaction::Transaction, wallet_context::WalletContext};
use sui_types::{
    base_types::{ObjectID, SuiAddress},
    digests::TransactionDigest,
    transaction::{ProgrammableTransaction, TransactionData},
    transaction_driver_types::ExecuteTransactionRequestType,
};
use tracing::debug;

use crate::utils::constants::{FINALITY_BASE_DELAY_MS, FINALITY_MAX_ATTEMPTS};

#[async_trait]
pub trait SuiClientExt {
    /// Current Water Cooler price in MIST, read from the factory object.
    async fn get_cooler_price(&self, factory_id: ObjectID) -> Result<u64>;

    /// Fetch the object changes of a submitted transaction, polling with
    /// exponential backoff until the fullnode has indexed it.
    async fn wait_for_object_changes(
        &self,
        digest: TransactionDigest,
    ) -> Result<SuiTransactionBlockResponse>;

    async fn sign_and_execute_tx(
        &self,
        tx_data: TransactionData,
        wallet: WalletContext,
    ) -> Result<SuiTransactionBlockResponse>;

    async fn build_tx_data(
        &self,
        pt: ProgrammableTransaction,
        sender: SuiAddress,
        gas_budget: u64,
    ) -> Result<TransactionData>;
}

#[async_trait]
impl SuiClientExt for SuiClient {
    async fn get_cooler_price(&self, factory_id: ObjectID) -> Result<u64> {
        let obj = self
            .read_api()
            .get_object_with_options(factory_id, SuiObjectDataOptions::new().with_content())
            .await?;

        let data = obj
            .data
            .ok_or_else(|| anyhow!("cooler factory {factory_id} not found on chain"))?;

        let content = data
            .content
            .ok_or_else(|| anyhow!("cooler factory {factory_id} has no content"))?;

        let SuiParsedData::MoveObject(move_obj) = content else {
            bail!("cooler factory {factory_id} is not a Move object");
        };

        let fields = move_obj.fields.to_json_value();
        let price = fields
            .get("price")
            .ok_or_else(|| anyhow!("cooler factory has no `price` field"))?;

        // u64 fields come back as JSON strings, but accept a bare number too
        match price {
            serde_json::Value::String(s) => Ok(s.parse()?),
            other => other
                .as_u64()
                .ok_or_else(|| anyhow!("unexpected `price` encoding: {other}")),
        }
    }

    async fn wait_for_object_changes(
        &self,
        digest: TransactionDigest,
    ) -> Result<SuiTransactionBlockResponse> {
        let options = SuiTransactionBlockResponseOptions::new().with_object_changes();
        let mut delay = Duration::from_millis(FINALITY_BASE_DELAY_MS);

        for attempt in 1..=FINALITY_MAX_ATTEMPTS {
            match self
                .read_api()
                .get_transaction_block(digest, options.clone())
                .await
            {
                Ok(resp) if resp.object_changes.is_some() => return Ok(resp),
                Ok(_) => debug!("transaction {} has no object changes yet", digest),
                Err(e) => debug!(
                    "transaction {} not available (attempt {}): {}",
                    digest, attempt, e
                ),
            }

            if attempt < FINALITY_MAX_ATTEMPTS {
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
        }

        bail!(
            "transaction {} not finalized after {} attempts",
            digest,
            FINALITY_MAX_ATTEMPTS
        )
    }

    async fn sign_and_execute_tx(
        &self,
        tx_data: TransactionData,
        mut wallet: WalletContext,
    ) -> Result<SuiTransactionBlockResponse> {
        let sender = wallet.active_address()?;
        let key = KeyIdentity::Address(sender);

        let signature = wallet
            .sign_secure(&key, &tx_data, Intent::sui_transaction())
            .await?;

        let tx = Transaction::from_data(tx_data, vec![signature]);

        let response = self
            .quorum_driver_api()
            .execute_transaction_block(
                tx,
                SuiTransactionBlockResponseOptions::new().with_effects(),
                Some(ExecuteTransactionRequestType::WaitForLocalExecution),
            )
            .await?;

        Ok(response)
    }

    async fn build_tx_data(
        &self,
        pt: ProgrammableTransaction,
        sender: SuiAddress,
        gas_budget: u64,
    ) -> Result<TransactionData> {
        let gas_coins = self
            .coin_read_api()
            .get_coins(sender, None, None, None)
            .await?;

        let gas_coin = gas_coins
            .data
            .first()
            .ok_or_else(|| anyhow!("No gas coins available for sender {sender}"))?;

        let gas_object = (gas_coin.coin_object_id, gas_coin.version, gas_coin.digest);

        let gas_price = self.read_api().get_reference_gas_price().await?;

        let tx_data =
            TransactionData::new_programmable(sender, vec![gas_object], pt, gas_budget, gas_price);

        Ok(tx_data)
    }
}
