use anyhow::Result;
use sui_sdk::SuiClient;
use sui_types::{
    Identifier,
    base_types::{ObjectID, SuiAddress},
    programmable_transaction_builder::ProgrammableTransactionBuilder,
    transaction::{Argument, Command, ObjectArg, ProgrammableTransaction, TransactionData},
};

use crate::{
    client::client_ext::SuiClientExt,
    ptb::object_ext::ObjectIDExt,
    types::cooler::CoolerDetails,
    utils::config::AppConfig,
    utils::constants::{BUY_WATER_COOLER_FUNCTION, COOLER_FACTORY_MODULE},
};

/// Purchase transaction: split the exact price off the gas coin and hand it
/// to the factory's buy entry point along with the collection metadata.
pub fn buy_water_cooler_pt(
    package_id: ObjectID,
    factory: ObjectArg,
    price: u64,
    details: &CoolerDetails,
) -> Result<ProgrammableTransaction> {
    let mut ptb = ProgrammableTransactionBuilder::new();

    let factory_arg = ptb.obj(factory)?;

    let price_arg = ptb.pure(price)?;
    let coin = ptb.command(Command::SplitCoins(Argument::GasCoin, vec![price_arg]));

    let name_arg = ptb.pure(details.name.as_str())?;
    let description_arg = ptb.pure(details.description.as_str())?;
    let image_url_arg = ptb.pure(details.image_url.as_str())?;
    let supply_arg = ptb.pure(details.supply)?;
    let treasury_arg = ptb.pure(details.treasury)?;

    ptb.command(Command::move_call(
        package_id,
        Identifier::new(COOLER_FACTORY_MODULE)?,
        Identifier::new(BUY_WATER_COOLER_FUNCTION)?,
        vec![],
        vec![
            factory_arg,
            coin,
            name_arg,
            description_arg,
            image_url_arg,
            supply_arg,
            treasury_arg,
        ],
    ));

    Ok(ptb.finish())
}

pub async fn buy_water_cooler_tx(
    client: &SuiClient,
    sender: SuiAddress,
    cfg: &AppConfig,
    price: u64,
) -> Result<TransactionData> {
    let package_id = ObjectID::from_hex_literal(&cfg.package_id)?;
    let factory_id = ObjectID::from_hex_literal(&cfg.cooler_factory_id)?;

    // The factory is a shared protocol object; buying mutates its ledger
    let factory = factory_id.shared_arg(client, true).await?;

    let pt = buy_water_cooler_pt(package_id, factory, price, &cfg.cooler)?;

    client.build_tx_data(pt, sender, cfg.gas_budget).await
}
