//! Fake wallet backend for exercising wallet UI flows in isolation.
//!
//! The interesting piece is [`derivation`], which synthesizes the accounts a
//! hardware wallet would report for a range of derivation indices. The other
//! modules are canned answers for allowance, balance, password, token and
//! NFT gateway calls, all reachable through [`backend::MockWalletBackend`].
//!
//! ```
//! use wallet_mock::derivation::derive_accounts;
//! use wallet_mock::types::HardwareWalletConnectOptions;
//!
//! let accounts = derive_accounts(&HardwareWalletConnectOptions::new(5, 7));
//! assert_eq!(accounts[0].derivation_path, "m/44'/60'/5'/0/0");
//! assert_eq!(accounts[1].derivation_path, "m/44'/60'/6'/0/0");
//! ```

pub mod backend;
pub mod balance;
pub mod call_log;
pub mod config;
pub mod derivation;
pub mod errors;
pub mod gateway;
pub mod password;
pub mod token;
pub mod types;

pub use backend::{MockWalletBackend, WalletBackend};
pub use config::MockConfig;
pub use derivation::{derive_accounts, try_derive_accounts};
pub use errors::{MockResult, WalletMockError};
pub use types::{HardwareWalletAccount, HardwareWalletConnectOptions};
