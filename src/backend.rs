//! Wallet backend call surface and its in-memory fake.
//!
//! `WalletBackend` names the calls the wallet UI makes. `MockWalletBackend`
//! answers them from fixtures so UI flows can run without a wallet engine.
//! Every call resolves immediately; the async signatures only mirror the real
//! backend.

#![allow(async_fn_in_trait)]

use crate::balance;
use crate::call_log::{CallLog, CallRecord};
use crate::config::MockConfig;
use crate::derivation;
use crate::errors::MockResult;
use crate::gateway;
use crate::password;
use crate::token;
use crate::types::{HardwareWalletAccount, HardwareWalletConnectOptions, TokenInfoResponse};
use tokio::sync::Mutex;
use tracing::info;

pub trait WalletBackend {
    async fn get_erc20_allowance(
        &self,
        from_address: &str,
        selected_account_address: &str,
        allowance_target: &str,
    ) -> String;

    async fn is_strong_password(&self, value: &str) -> bool;

    async fn connect_hardware_wallet(
        &self,
        options: &HardwareWalletConnectOptions,
    ) -> Vec<HardwareWalletAccount>;

    async fn get_balance(&self) -> String;

    async fn get_blockchain_token_info(&self, contract_address: &str) -> TokenInfoResponse;

    async fn translate_to_nft_gateway(&self, url: Option<&str>) -> Option<String>;
}

pub struct MockWalletBackend {
    config: MockConfig,
    allowance: Mutex<String>,
    calls: Mutex<CallLog>,
}

impl Default for MockWalletBackend {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

impl MockWalletBackend {
    pub fn new(config: MockConfig) -> Self {
        let allowance = Mutex::new(config.initial_allowance.clone());
        Self {
            config,
            allowance,
            calls: Mutex::new(CallLog::new()),
        }
    }

    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    /// Replace the allowance reported when no target is given.
    pub async fn set_erc20_allowance(&self, new_allowance: impl Into<String>) {
        let new_allowance = new_allowance.into();
        self.record("set_erc20_allowance", format!("allowance={}", new_allowance)).await;
        *self.allowance.lock().await = new_allowance;
    }

    /// Strict account derivation: reversed or non-hardenable ranges are an error.
    pub async fn try_connect_hardware_wallet(
        &self,
        options: &HardwareWalletConnectOptions,
    ) -> MockResult<Vec<HardwareWalletAccount>> {
        self.record(
            "try_connect_hardware_wallet",
            format!("start={} stop={}", options.start_index, options.stop_index),
        )
        .await;
        derivation::try_derive_accounts(options, &self.config)
    }

    pub async fn calls(&self) -> Vec<CallRecord> {
        self.calls.lock().await.records().to_vec()
    }

    pub async fn operations(&self) -> Vec<&'static str> {
        self.calls.lock().await.operations()
    }

    pub async fn clear_calls(&self) {
        self.calls.lock().await.clear();
    }

    async fn record(&self, operation: &'static str, details: impl AsRef<str>) {
        self.calls.lock().await.append(operation, details);
    }
}

impl WalletBackend for MockWalletBackend {
    async fn get_erc20_allowance(
        &self,
        from_address: &str,
        selected_account_address: &str,
        allowance_target: &str,
    ) -> String {
        self.record(
            "get_erc20_allowance",
            format!(
                "from={} account={} target={}",
                from_address, selected_account_address, allowance_target
            ),
        )
        .await;
        let mocked = self.allowance.lock().await;
        balance::resolve_allowance(allowance_target, &mocked)
    }

    async fn is_strong_password(&self, value: &str) -> bool {
        self.record("is_strong_password", format!("len={}", password::password_length(value))).await;
        password::is_strong_password(value, self.config.min_password_length)
    }

    async fn connect_hardware_wallet(
        &self,
        options: &HardwareWalletConnectOptions,
    ) -> Vec<HardwareWalletAccount> {
        self.record(
            "connect_hardware_wallet",
            format!("start={} stop={}", options.start_index, options.stop_index),
        )
        .await;
        let accounts = derivation::derive_accounts_with_config(options, &self.config);
        info!(
            "Mock {} returned {} accounts from index {}",
            self.config.hardware_vendor,
            accounts.len(),
            options.start_index
        );
        accounts
    }

    async fn get_balance(&self) -> String {
        self.record("get_balance", "").await;
        balance::mock_balance()
    }

    async fn get_blockchain_token_info(&self, contract_address: &str) -> TokenInfoResponse {
        self.record("get_blockchain_token_info", format!("contract={}", contract_address)).await;
        token::get_blockchain_token_info(contract_address)
    }

    async fn translate_to_nft_gateway(&self, url: Option<&str>) -> Option<String> {
        self.record("translate_to_nft_gateway", url.unwrap_or("")).await;
        gateway::translate_to_nft_gateway(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WalletMockError;
    use crate::token::BAT_CONTRACT_ADDRESS;
    use std::sync::Arc;

    // ==================== allowance tests ====================

    #[tokio::test]
    async fn test_allowance_defaults_to_one_unit() {
        let backend = MockWalletBackend::default();
        assert_eq!(backend.get_erc20_allowance("0xa", "0xb", "").await, "1000000000000000000");
    }

    #[tokio::test]
    async fn test_allowance_target_wins() {
        let backend = MockWalletBackend::default();
        backend.set_erc20_allowance("5").await;
        assert_eq!(backend.get_erc20_allowance("0xa", "0xb", "77").await, "77");
    }

    #[tokio::test]
    async fn test_set_allowance_changes_fallback() {
        let backend = MockWalletBackend::default();
        backend.set_erc20_allowance("0").await;
        assert_eq!(backend.get_erc20_allowance("0xa", "0xb", "").await, "0");
    }

    #[tokio::test]
    async fn test_allowance_is_per_backend() {
        let first = MockWalletBackend::default();
        let second = MockWalletBackend::default();
        first.set_erc20_allowance("9").await;
        assert_eq!(second.get_erc20_allowance("0xa", "0xb", "").await, "1000000000000000000");
    }

    // ==================== hardware wallet tests ====================

    #[tokio::test]
    async fn test_connect_hardware_wallet() {
        let backend = MockWalletBackend::default();
        let accounts = backend
            .connect_hardware_wallet(&HardwareWalletConnectOptions::new(5, 7))
            .await;
        let paths: Vec<_> = accounts.iter().map(|a| a.derivation_path.as_str()).collect();
        assert_eq!(paths, vec!["m/44'/60'/5'/0/0", "m/44'/60'/6'/0/0"]);
    }

    #[tokio::test]
    async fn test_connect_hardware_wallet_reversed_range() {
        let backend = MockWalletBackend::default();
        let accounts = backend
            .connect_hardware_wallet(&HardwareWalletConnectOptions::new(3, 1))
            .await;
        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn test_try_connect_hardware_wallet_reversed_range() {
        let backend = MockWalletBackend::default();
        let err = backend
            .try_connect_hardware_wallet(&HardwareWalletConnectOptions::new(3, 1))
            .await
            .unwrap_err();
        assert_eq!(err, WalletMockError::InvalidRange { start: 3, stop: 1 });
    }

    #[tokio::test]
    async fn test_connect_uses_config_placeholders() {
        let config = MockConfig {
            account_name: "Trezor 1".to_string(),
            hardware_vendor: "Trezor".to_string(),
            ..MockConfig::default()
        };
        let backend = MockWalletBackend::new(config);
        let accounts = backend
            .connect_hardware_wallet(&HardwareWalletConnectOptions::new(0, 1))
            .await;
        assert_eq!(accounts[0].name, "Trezor 1");
        assert_eq!(accounts[0].hardware_vendor, "Trezor");
    }

    // ==================== other stub tests ====================

    #[test]
    fn test_password_and_balance_block_on() {
        let backend = MockWalletBackend::default();
        assert!(!tokio_test::block_on(backend.is_strong_password("short")));
        assert!(tokio_test::block_on(backend.is_strong_password("long enough")));
        assert_eq!(tokio_test::block_on(backend.get_balance()), "0");
    }

    #[tokio::test]
    async fn test_token_info() {
        let backend = MockWalletBackend::default();
        let bat = backend
            .get_blockchain_token_info(&BAT_CONTRACT_ADDRESS.to_lowercase())
            .await;
        assert_eq!(bat.token.map(|t| t.symbol), Some("BAT".to_string()));
        let unknown = backend
            .get_blockchain_token_info("0x0000000000000000000000000000000000000001")
            .await;
        assert!(unknown.token.is_none());
    }

    #[tokio::test]
    async fn test_translate_to_nft_gateway() {
        let backend = MockWalletBackend::default();
        assert_eq!(
            backend.translate_to_nft_gateway(Some("https://x/1")).await,
            Some("https://x/1".to_string())
        );
        assert_eq!(backend.translate_to_nft_gateway(None).await, None);
    }

    // ==================== call journal tests ====================

    #[tokio::test]
    async fn test_calls_recorded_in_order() {
        let backend = MockWalletBackend::default();
        backend.get_balance().await;
        backend
            .connect_hardware_wallet(&HardwareWalletConnectOptions::new(0, 3))
            .await;
        backend.is_strong_password("hunter22").await;
        assert_eq!(
            backend.operations().await,
            vec!["get_balance", "connect_hardware_wallet", "is_strong_password"]
        );
        let calls = backend.calls().await;
        assert_eq!(calls[1].details, "start=0 stop=3");
        assert_eq!(calls[2].details, "len=8");
    }

    #[tokio::test]
    async fn test_clear_calls() {
        let backend = MockWalletBackend::default();
        backend.get_balance().await;
        backend.clear_calls().await;
        assert!(backend.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_shared_backend_across_tasks() {
        let backend = Arc::new(MockWalletBackend::default());
        let worker = {
            let backend = Arc::clone(&backend);
            tokio::spawn(async move {
                backend.set_erc20_allowance("123").await;
            })
        };
        worker.await.unwrap();
        assert_eq!(backend.get_erc20_allowance("0xa", "0xb", "").await, "123");
    }
}
