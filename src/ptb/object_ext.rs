use anyhow::{Result, anyhow};
use async_trait::async_trait;
use sui_json_rpc_types::SuiObjectDataOptions;
use sui_sdk::SuiClient;
use sui_types::base_types::ObjectID;
use sui_types::object::Owner;
use sui_types::transaction::{ObjectArg, SharedObjectMutability};

/// Resolve an `ObjectID` to the `ObjectArg` a transaction input needs.
///
/// Resolution happens before PTB construction so the builders themselves
/// stay synchronous and testable without a fullnode.
#[async_trait]
pub trait ObjectIDExt {
    /// Fresh reference for an owned (or immutable) object input.
    async fn owned_arg(&self, client: &SuiClient) -> Result<ObjectArg>;

    /// Shared object input; looks up the initial shared version.
    async fn shared_arg(&self, client: &SuiClient, mutable: bool) -> Result<ObjectArg>;
}

#[async_trait]
impl ObjectIDExt for ObjectID {
    async fn owned_arg(&self, client: &SuiClient) -> Result<ObjectArg> {
        let obj = client
            .read_api()
            .get_object_with_options(*self, SuiObjectDataOptions::new().with_owner())
            .await?;

        let data = obj
            .data
            .ok_or_else(|| anyhow!("object {self} not found on chain"))?;

        Ok(ObjectArg::ImmOrOwnedObject(data.object_ref()))
    }

    async fn shared_arg(&self, client: &SuiClient, mutable: bool) -> Result<ObjectArg> {
        let obj = client
            .read_api()
            .get_object_with_options(*self, SuiObjectDataOptions::new().with_owner())
            .await?;

        let data = obj
            .data
            .ok_or_else(|| anyhow!("object {self} not found on chain"))?;

        let owner = data
            .owner
            .ok_or_else(|| anyhow!("object {self} has no owner information"))?;

        let initial_shared_version = match owner {
            Owner::Shared {
                initial_shared_version,
            } => initial_shared_version,
            _ => return Err(anyhow!("object {self} is not shared")),
        };

        let mutability = if mutable {
            SharedObjectMutability::Mutable
        } else {
            SharedObjectMutability::Immutable
        };

        Ok(ObjectArg::SharedObject {
            id: *self,
            initial_shared_version,
            mutability,
        })
    }
}
