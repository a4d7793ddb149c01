use sui_json_rpc_types::SuiTransactionBlockResponse;

use crate::utils::constants::MIST_PER_SUI;

pub mod changes;
pub mod config;
pub mod constants;
pub mod snapshot;

pub fn handle_response(resp: &SuiTransactionBlockResponse) {
    match resp.status_ok() {
        Some(true) => {
            println!("Transaction succeeded");
        }
        Some(false) => {
            println!("Transaction failed");
        }
        None => {
            println!("No execution status returned");
        }
    }
}

/// Render a MIST amount as a decimal SUI amount for display.
pub fn mist_to_sui(mist: u64) -> String {
    let whole = mist / MIST_PER_SUI;
    let frac = mist % MIST_PER_SUI;

    if frac == 0 {
        return whole.to_string();
    }

    let frac = format!("{frac:09}");
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
