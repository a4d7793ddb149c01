use anyhow::{Context, Result, anyhow, bail};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use sui_types::base_types::ObjectID;

use crate::utils::constants::DIGESTS_SECTION;
use crate::utils::snapshot::to_json_pretty;

/// Network-scoped store of on-chain identifiers derived from past runs.
///
/// The file is a JSON object of sections: one per network (object ids keyed
/// by logical name) plus a `digests` section holding the last digest of each
/// flow. Every `update` saves immediately, so an id confirmed on chain is on
/// disk before the next extraction runs. Single-operator tool; no locking.
pub struct IdStore {
    path: PathBuf,
    root: Map<String, Value>,
}

impl IdStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let root = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading id store {}", path.display()))?;
            let value: Value = serde_json::from_str(&raw)
                .with_context(|| format!("parsing id store {}", path.display()))?;
            match value {
                Value::Object(map) => map,
                _ => bail!("id store {} is not a JSON object", path.display()),
            }
        } else {
            Map::new()
        };

        Ok(Self { path, root })
    }

    /// Upsert one key in one section and persist the whole document.
    pub fn update(&mut self, section: &str, key: &str, value: impl Into<Value>) -> Result<()> {
        let section_value = self
            .root
            .entry(section.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        let section_map = section_value
            .as_object_mut()
            .ok_or_else(|| anyhow!("section `{section}` is not a JSON object"))?;

        section_map.insert(key.to_string(), value.into());
        self.save()
    }

    pub fn record_digest(&mut self, flow: &str, digest: &str) -> Result<()> {
        self.update(DIGESTS_SECTION, flow, digest)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.root.get(section)?.get(key)
    }

    /// Read an id that may legitimately be absent or have been persisted as
    /// `null` after a missed extraction.
    pub fn id(&self, section: &str, key: &str) -> Result<Option<ObjectID>> {
        match self.get(section, key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(ObjectID::from_hex_literal(s).with_context(
                || format!("`{key}` in section `{section}` is not a valid object id"),
            )?)),
            Some(other) => bail!(
                "`{key}` in section `{section}` should be an id string, got {other}"
            ),
        }
    }

    pub fn required_id(&self, section: &str, key: &str) -> Result<ObjectID> {
        self.id(section, key)?.ok_or_else(|| {
            anyhow!(
                "no `{key}` recorded for `{section}` in {}; run `watercooler buy` first",
                self.path.display()
            )
        })
    }

    pub fn id_array(&self, section: &str, key: &str) -> Result<Vec<ObjectID>> {
        let value = self.get(section, key).ok_or_else(|| {
            anyhow!(
                "no `{key}` recorded for `{section}` in {}",
                self.path.display()
            )
        })?;

        let items = value
            .as_array()
            .ok_or_else(|| anyhow!("`{key}` in section `{section}` is not an array"))?;

        items
            .iter()
            .map(|item| {
                let s = item
                    .as_str()
                    .ok_or_else(|| anyhow!("non-string entry in `{key}`: {item}"))?;
                ObjectID::from_hex_literal(s)
                    .with_context(|| format!("invalid object id in `{key}`: {s}"))
            })
            .collect()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }

        let json = to_json_pretty(&self.root)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing id store {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::IdStore;
    use crate::utils::constants::{DIGESTS_SECTION, DIGEST_BUY};
    use serde_json::{Value, json};
    use std::path::PathBuf;
    use sui_types::base_types::ObjectID;

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("objects.json")
    }

    #[test]
    fn updates_persist_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let id = ObjectID::random().to_string();

        let mut store = IdStore::open(store_path(&dir)).unwrap();
        store.update("testnet", "water_cooler_id", id.clone()).unwrap();
        drop(store);

        let store = IdStore::open(store_path(&dir)).unwrap();
        assert_eq!(
            store.get("testnet", "water_cooler_id"),
            Some(&Value::String(id))
        );
    }

    #[test]
    fn sections_scope_keys_by_network() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = IdStore::open(store_path(&dir)).unwrap();

        store.update("testnet", "registry_id", "0x1").unwrap();
        store.update("mainnet", "registry_id", "0x2").unwrap();

        assert_eq!(
            store.id("testnet", "registry_id").unwrap(),
            Some(ObjectID::from_hex_literal("0x1").unwrap())
        );
        assert_eq!(
            store.id("mainnet", "registry_id").unwrap(),
            Some(ObjectID::from_hex_literal("0x2").unwrap())
        );
    }

    #[test]
    fn null_values_read_back_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = IdStore::open(store_path(&dir)).unwrap();

        store.update("testnet", "collection_id", Value::Null).unwrap();

        assert_eq!(store.id("testnet", "collection_id").unwrap(), None);
        assert!(store.required_id("testnet", "collection_id").is_err());
    }

    #[test]
    fn required_id_points_at_the_buy_command_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = IdStore::open(store_path(&dir)).unwrap();

        let err = store.required_id("testnet", "mint_warehouse_id").unwrap_err();
        assert!(err.to_string().contains("watercooler buy"));
    }

    #[test]
    fn id_arrays_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = IdStore::open(store_path(&dir)).unwrap();

        let ids: Vec<String> = (0..3).map(|_| ObjectID::random().to_string()).collect();
        store.update("testnet", "mizu_nft_ids", json!(ids)).unwrap();

        let parsed = store.id_array("testnet", "mizu_nft_ids").unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].to_string(), ids[0]);
    }

    #[test]
    fn empty_id_array_is_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = IdStore::open(store_path(&dir)).unwrap();

        store.update("testnet", "mizu_nft_ids", json!([])).unwrap();
        assert!(store.id_array("testnet", "mizu_nft_ids").unwrap().is_empty());
    }

    #[test]
    fn recorded_digest_equals_the_submitted_digest() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = IdStore::open(store_path(&dir)).unwrap();

        store.record_digest(DIGEST_BUY, "9WzSXdCNquKp3rGkZjA").unwrap();

        assert_eq!(
            store.get(DIGESTS_SECTION, DIGEST_BUY),
            Some(&Value::String("9WzSXdCNquKp3rGkZjA".to_string()))
        );
    }

    #[test]
    fn updating_one_key_leaves_the_rest_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = IdStore::open(store_path(&dir)).unwrap();

        store.update("testnet", "registry_id", "0x1").unwrap();
        store.update("testnet", "collection_id", "0x2").unwrap();

        let store = IdStore::open(store_path(&dir)).unwrap();
        assert_eq!(
            store.id("testnet", "registry_id").unwrap(),
            Some(ObjectID::from_hex_literal("0x1").unwrap())
        );
        assert_eq!(
            store.id("testnet", "collection_id").unwrap(),
            Some(ObjectID::from_hex_literal("0x2").unwrap())
        );
    }
}
