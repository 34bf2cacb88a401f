use alloy_primitives::utils::format_units;
use alloy_primitives::{Address, U256};

pub const ETH_DECIMALS: u8 = 18;

/// Printed in place of a recipient for contract-creation transactions.
pub const CONTRACT_CREATION: &str = "<contract creation>";

/// Scales a raw amount by `10^decimals`. The division happens on the exact
/// decimal string from `format_units`; the value becomes an `f64` only here,
/// at the display boundary, so rounding is confined to the final render.
pub fn to_display(value: U256, decimals: u8) -> f64 {
    format_units(value, decimals)
        .ok()
        .and_then(|exact| exact.parse().ok())
        .unwrap_or(0.0)
}

pub fn format_amount(value: U256, decimals: u8) -> String {
    format!("{:.6}", to_display(value, decimals))
}

pub fn format_eth(wei: U256) -> String {
    format_amount(wei, ETH_DECIMALS)
}

pub fn recipient_label(to: Option<Address>) -> String {
    match to {
        Some(address) => address.to_checksum(None),
        None => CONTRACT_CREATION.to_string(),
    }
}
