//! Hardware account enumeration.
//!
//! Synthesizes the accounts a connected hardware wallet would report for a
//! range of derivation indices. Every record shares the configured placeholder
//! address, vendor and device; only the derivation path follows the index.

use crate::config::MockConfig;
use crate::errors::{MockResult, WalletMockError};
use crate::types::{CoinType, HardwareWalletAccount, HardwareWalletConnectOptions, KeyringId};
use tracing::debug;

/// First index that no longer fits a hardened BIP-32 child number
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Account-level Ethereum path, m/44'/60'/{index}'/0/0
pub fn derivation_path(index: u32) -> String {
    format!("m/44'/60'/{}'/0/0", index)
}

/// Derive placeholder accounts for `[start_index, stop_index)` using the default fixtures.
///
/// A reversed or empty range yields no accounts.
pub fn derive_accounts(options: &HardwareWalletConnectOptions) -> Vec<HardwareWalletAccount> {
    derive_accounts_with_config(options, &MockConfig::default())
}

pub fn derive_accounts_with_config(
    options: &HardwareWalletConnectOptions,
    config: &MockConfig,
) -> Vec<HardwareWalletAccount> {
    debug!(
        start = options.start_index,
        stop = options.stop_index,
        "deriving mock hardware accounts"
    );

    (options.start_index..options.stop_index)
        .map(|index| HardwareWalletAccount {
            coin: CoinType::Eth,
            keyring_id: KeyringId::Default,
            address: config.account_address.clone(),
            derivation_path: derivation_path(index),
            name: config.account_name.clone(),
            hardware_vendor: config.hardware_vendor.clone(),
            device_id: config.device_id.clone(),
            network: None,
        })
        .collect()
}

/// Check that a range can be derived as hardened account indices.
pub fn validate_range(options: &HardwareWalletConnectOptions) -> MockResult<()> {
    let (start, stop) = (options.start_index, options.stop_index);
    if stop < start {
        return Err(WalletMockError::InvalidRange { start, stop });
    }
    // stop is exclusive, so the last derived index is stop - 1
    if stop > HARDENED_OFFSET {
        return Err(WalletMockError::IndexOutOfRange(stop - 1));
    }
    Ok(())
}

/// Strict variant of `derive_accounts`: rejects reversed ranges and indices
/// at or above the hardened offset instead of quietly adjusting.
pub fn try_derive_accounts(
    options: &HardwareWalletConnectOptions,
    config: &MockConfig,
) -> MockResult<Vec<HardwareWalletAccount>> {
    validate_range(options)?;
    Ok(derive_accounts_with_config(options, config))
}
