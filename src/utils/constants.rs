// Default fullnode endpoints per network
pub const TESTNET_RPC_URL: &str = "https://fullnode.testnet.sui.io:443";
pub const MAINNET_RPC_URL: &str = "https://fullnode.mainnet.sui.io:443";
pub const DEVNET_RPC_URL: &str = "https://fullnode.devnet.sui.io:443";
pub const LOCALNET_RPC_URL: &str = "http://127.0.0.1:9000";

// Move call targets in the Water Cooler package
pub const COOLER_FACTORY_MODULE: &str = "cooler_factory";
pub const BUY_WATER_COOLER_FUNCTION: &str = "buy_water_cooler";
pub const MINT_MODULE: &str = "mint";
pub const STOCK_WAREHOUSE_FUNCTION: &str = "admin_add_to_mint_warehouse";
pub const NFT_MODULE: &str = "mizu_nft";
pub const NFT_TYPE_NAME: &str = "MizuNFT";

// Id store keys, scoped under the network section
pub const WATER_COOLER_ID_KEY: &str = "water_cooler_id";
pub const WATER_COOLER_ADMIN_CAP_ID_KEY: &str = "water_cooler_admin_cap_id";
pub const REGISTRY_ID_KEY: &str = "registry_id";
pub const REGISTRY_ADMIN_CAP_ID_KEY: &str = "registry_admin_cap_id";
pub const MINT_SETTINGS_ID_KEY: &str = "mint_settings_id";
pub const MINT_WAREHOUSE_ID_KEY: &str = "mint_warehouse_id";
pub const MINT_ADMIN_CAP_ID_KEY: &str = "mint_admin_cap_id";
pub const COLLECTION_ID_KEY: &str = "collection_id";
pub const NFT_IDS_KEY: &str = "mizu_nft_ids";

// Digest history section and keys
pub const DIGESTS_SECTION: &str = "digests";
pub const DIGEST_BUY: &str = "buy";
pub const DIGEST_STOCK: &str = "stock";

/// Every object the purchase transaction is expected to create, paired with
/// the type-tag suffix it is recognised by in the object-change record.
pub const TRACKED_OBJECTS: [(&str, &str); 8] = [
    (WATER_COOLER_ID_KEY, "::water_cooler::WaterCooler"),
    (
        WATER_COOLER_ADMIN_CAP_ID_KEY,
        "::water_cooler::WaterCoolerAdminCap",
    ),
    (REGISTRY_ID_KEY, "::registry::Registry"),
    (REGISTRY_ADMIN_CAP_ID_KEY, "::registry::RegistryAdminCap"),
    (MINT_SETTINGS_ID_KEY, "::mint::MintSettings"),
    (MINT_WAREHOUSE_ID_KEY, "::mint::MintWarehouse"),
    (MINT_ADMIN_CAP_ID_KEY, "::mint::MintAdminCap"),
    (COLLECTION_ID_KEY, "::collection::Collection"),
];

// Snapshot file names, written under the configured output directory
pub const BUY_SNAPSHOT_FILE: &str = "water_cooler.json";
pub const STOCK_SNAPSHOT_FILE: &str = "warehouse.json";

// Finality poll budget
pub const FINALITY_MAX_ATTEMPTS: u32 = 6;
pub const FINALITY_BASE_DELAY_MS: u64 = 500;

pub const MIST_PER_SUI: u64 = 1_000_000_000;
