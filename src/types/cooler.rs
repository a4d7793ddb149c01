use serde::{Deserialize, Serialize};
use sui_types::base_types::SuiAddress;

/// Collection metadata handed to `cooler_factory::buy_water_cooler`.
///
/// Supplied by the operator through the application configuration; the chain
/// stores these values on the Water Cooler object at purchase time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoolerDetails {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub supply: u64,
    pub treasury: SuiAddress,
}
