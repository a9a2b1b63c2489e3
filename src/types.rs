//! Data model shared by the mock backend and its fixtures.
//!
//! Field names serialize in camelCase so dumped fixtures line up with what the
//! wallet frontend reads.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Blockchain family an account or token belongs to.
///
/// Serialized as its SLIP-44 number, the way the frontend enum carries it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CoinType {
    Eth,
    Sol,
    Fil,
    Btc,
    Zec,
}

impl CoinType {
    /// SLIP-44 registered coin type
    pub const fn slip44(&self) -> u32 {
        match self {
            CoinType::Eth => 60,
            CoinType::Sol => 501,
            CoinType::Fil => 461,
            CoinType::Btc => 0,
            CoinType::Zec => 133,
        }
    }

    pub fn from_slip44(value: u32) -> Option<Self> {
        match value {
            60 => Some(CoinType::Eth),
            501 => Some(CoinType::Sol),
            461 => Some(CoinType::Fil),
            0 => Some(CoinType::Btc),
            133 => Some(CoinType::Zec),
            _ => None,
        }
    }
}

impl Default for CoinType {
    fn default() -> Self {
        CoinType::Eth
    }
}

impl Serialize for CoinType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.slip44())
    }
}

impl<'de> Deserialize<'de> for CoinType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u32::deserialize(deserializer)?;
        CoinType::from_slip44(value)
            .ok_or_else(|| de::Error::custom(format!("unknown coin type {}", value)))
    }
}

/// Keyring namespace an account lives in.
///
/// Discriminants follow the frontend's numeric keyring ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum KeyringId {
    Default = 0,
    Filecoin = 1,
    Solana = 3,
    Bitcoin84 = 4,
    ZCashMainnet = 6,
}

impl KeyringId {
    pub const fn id(&self) -> u32 {
        *self as u32
    }

    pub fn from_id(value: u32) -> Option<Self> {
        match value {
            0 => Some(KeyringId::Default),
            1 => Some(KeyringId::Filecoin),
            3 => Some(KeyringId::Solana),
            4 => Some(KeyringId::Bitcoin84),
            6 => Some(KeyringId::ZCashMainnet),
            _ => None,
        }
    }
}

impl Default for KeyringId {
    fn default() -> Self {
        KeyringId::Default
    }
}

impl Serialize for KeyringId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.id())
    }
}

impl<'de> Deserialize<'de> for KeyringId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u32::deserialize(deserializer)?;
        KeyringId::from_id(value)
            .ok_or_else(|| de::Error::custom(format!("unknown keyring id {}", value)))
    }
}

fn default_hardware_vendor() -> String {
    "Ledger".to_string()
}

/// Options passed when connecting a hardware wallet and asking for accounts.
///
/// `start_index` is inclusive, `stop_index` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareWalletConnectOptions {
    pub start_index: u32,
    pub stop_index: u32,
    #[serde(default = "default_hardware_vendor")]
    pub hardware_vendor: String,
    #[serde(default)]
    pub coin: CoinType,
    #[serde(default)]
    pub keyring_id: KeyringId,
}

impl HardwareWalletConnectOptions {
    pub fn new(start_index: u32, stop_index: u32) -> Self {
        Self {
            start_index,
            stop_index,
            hardware_vendor: default_hardware_vendor(),
            coin: CoinType::default(),
            keyring_id: KeyringId::default(),
        }
    }

    /// Number of accounts the range covers (zero for empty or reversed ranges)
    pub fn len(&self) -> usize {
        self.stop_index.saturating_sub(self.start_index) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One account as reported by a hardware device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareWalletAccount {
    pub coin: CoinType,
    pub keyring_id: KeyringId,
    pub address: String,
    pub derivation_path: String,
    pub name: String,
    pub hardware_vendor: String,
    pub device_id: String,
    pub network: Option<String>,
}

/// Token metadata as returned by a chain lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainToken {
    pub contract_address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub logo: String,
    pub is_erc20: bool,
    pub is_erc721: bool,
    pub is_nft: bool,
    pub visible: bool,
    pub coingecko_id: String,
    pub chain_id: String,
    pub coin: CoinType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfoResponse {
    pub token: Option<BlockchainToken>,
}
