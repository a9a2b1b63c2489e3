use crate::errors::{MockResult, WalletMockError};
use anyhow::{Context, Result};
use ethers::types::Address;
use std::env;

/// Placeholder address reported for every mocked hardware account
pub const MOCK_ACCOUNT_ADDRESS: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";

pub const MOCK_ACCOUNT_NAME: &str = "Ledger 1";
pub const MOCK_HARDWARE_VENDOR: &str = "Ledger";
pub const MOCK_DEVICE_ID: &str = "device1";

/// 1 unit at 18 decimals
pub const MOCK_ALLOWANCE: &str = "1000000000000000000";

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Parse a hex account address, with or without the 0x prefix
pub fn parse_address(value: &str) -> MockResult<Address> {
    value
        .trim()
        .parse::<Address>()
        .map_err(|_| WalletMockError::InvalidAddress(value.to_string()))
}

/// Canned values the mock backend hands out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockConfig {
    pub account_address: String,
    pub account_name: String,
    pub hardware_vendor: String,
    pub device_id: String,
    pub initial_allowance: String,
    pub min_password_length: usize,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            account_address: MOCK_ACCOUNT_ADDRESS.to_string(),
            account_name: MOCK_ACCOUNT_NAME.to_string(),
            hardware_vendor: MOCK_HARDWARE_VENDOR.to_string(),
            device_id: MOCK_DEVICE_ID.to_string(),
            initial_allowance: MOCK_ALLOWANCE.to_string(),
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl MockConfig {
    /// Build a config from `MOCK_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(address) = lookup("MOCK_ACCOUNT_ADDRESS") {
            parse_address(&address).context("MOCK_ACCOUNT_ADDRESS")?;
            config.account_address = address.trim().to_string();
        }
        if let Some(name) = lookup("MOCK_ACCOUNT_NAME") {
            config.account_name = name;
        }
        if let Some(vendor) = lookup("MOCK_HARDWARE_VENDOR") {
            config.hardware_vendor = vendor;
        }
        if let Some(device_id) = lookup("MOCK_DEVICE_ID") {
            config.device_id = device_id;
        }
        if let Some(allowance) = lookup("MOCK_ALLOWANCE") {
            config.initial_allowance = allowance;
        }
        if let Some(len) = lookup("MOCK_MIN_PASSWORD_LENGTH") {
            config.min_password_length = len
                .trim()
                .parse()
                .with_context(|| format!("MOCK_MIN_PASSWORD_LENGTH is not a number: {}", len))?;
        }
        Ok(config)
    }
}
