use anyhow::Result;
use sui_sdk::SuiClient;
use sui_types::{
    Identifier, parse_sui_type_tag,
    base_types::{ObjectID, SuiAddress},
    programmable_transaction_builder::ProgrammableTransactionBuilder,
    transaction::{Argument, Command, ObjectArg, ProgrammableTransaction, TransactionData},
};

use crate::{
    client::client_ext::SuiClientExt,
    ptb::object_ext::ObjectIDExt,
    utils::config::AppConfig,
    utils::constants::{MINT_MODULE, NFT_MODULE, NFT_TYPE_NAME, STOCK_WAREHOUSE_FUNCTION},
};

/// Stocking transaction: bundle the NFTs into one Move vector and add them to
/// the mint warehouse. The element type is explicit so an empty list still
/// builds; whether an empty stock is meaningful is the contract's call.
pub fn stock_warehouse_pt(
    package_id: ObjectID,
    admin_cap: ObjectArg,
    cooler: ObjectArg,
    nfts: Vec<ObjectArg>,
    warehouse: ObjectArg,
) -> Result<ProgrammableTransaction> {
    let mut ptb = ProgrammableTransactionBuilder::new();

    let admin_cap_arg = ptb.obj(admin_cap)?;
    let cooler_arg = ptb.obj(cooler)?;

    let nft_args = nfts
        .into_iter()
        .map(|nft| ptb.obj(nft))
        .collect::<Result<Vec<Argument>, _>>()?;

    let nft_type = parse_sui_type_tag(&format!("{package_id}::{NFT_MODULE}::{NFT_TYPE_NAME}"))?;
    let nft_vec = ptb.command(Command::MakeMoveVec(Some(nft_type), nft_args));

    let warehouse_arg = ptb.obj(warehouse)?;

    ptb.command(Command::move_call(
        package_id,
        Identifier::new(MINT_MODULE)?,
        Identifier::new(STOCK_WAREHOUSE_FUNCTION)?,
        vec![],
        vec![admin_cap_arg, cooler_arg, nft_vec, warehouse_arg],
    ));

    Ok(ptb.finish())
}

pub async fn stock_warehouse_tx(
    client: &SuiClient,
    sender: SuiAddress,
    cfg: &AppConfig,
    admin_cap_id: ObjectID,
    cooler_id: ObjectID,
    nft_ids: &[ObjectID],
    warehouse_id: ObjectID,
) -> Result<TransactionData> {
    let package_id = ObjectID::from_hex_literal(&cfg.package_id)?;

    let admin_cap = admin_cap_id.owned_arg(client).await?;
    let cooler = cooler_id.owned_arg(client).await?;
    let warehouse = warehouse_id.owned_arg(client).await?;

    let mut nfts = Vec::with_capacity(nft_ids.len());
    for nft_id in nft_ids {
        nfts.push(nft_id.owned_arg(client).await?);
    }

    let pt = stock_warehouse_pt(package_id, admin_cap, cooler, nfts, warehouse)?;

    client.build_tx_data(pt, sender, cfg.gas_budget).await
}

#[cfg(test)]
mod tests {
    use super::stock_warehouse_pt;
    use sui_types::base_types::{ObjectID, SequenceNumber};
    use sui_types::digests::ObjectDigest;
    use sui_types::transaction::{Command, ObjectArg};

    fn owned_arg() -> ObjectArg {
        ObjectArg::ImmOrOwnedObject((
            ObjectID::random(),
            SequenceNumber::from_u64(1),
            ObjectDigest::random(),
        ))
    }

    fn build(nft_count: usize) -> sui_types::transaction::ProgrammableTransaction {
        let nfts = (0..nft_count).map(|_| owned_arg()).collect();
        stock_warehouse_pt(
            ObjectID::random(),
            owned_arg(),
            owned_arg(),
            nfts,
            owned_arg(),
        )
        .unwrap()
    }

    #[test]
    fn move_vec_has_one_element_per_nft() {
        let pt = build(3);

        let Some(Command::MakeMoveVec(Some(_), elements)) = pt
            .commands
            .iter()
            .find(|c| matches!(c, Command::MakeMoveVec(..)))
        else {
            panic!("expected a typed MakeMoveVec command");
        };
        assert_eq!(elements.len(), 3);
    }

    #[test]
    fn empty_nft_list_still_builds() {
        let pt = build(0);

        let Some(Command::MakeMoveVec(Some(_), elements)) = pt
            .commands
            .iter()
            .find(|c| matches!(c, Command::MakeMoveVec(..)))
        else {
            panic!("expected a typed MakeMoveVec command");
        };
        assert!(elements.is_empty());
    }

    #[test]
    fn stock_call_passes_cap_cooler_vector_and_warehouse() {
        let pt = build(2);

        let Some(Command::MoveCall(call)) = pt
            .commands
            .iter()
            .find(|c| matches!(c, Command::MoveCall(_)))
        else {
            panic!("expected a move call");
        };

        assert_eq!(call.module.as_str(), "mint");
        assert_eq!(call.function.as_str(), "admin_add_to_mint_warehouse");
        assert_eq!(call.arguments.len(), 4);
    }
}
