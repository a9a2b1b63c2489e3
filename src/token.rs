//! Token metadata fixtures.

use crate::types::{BlockchainToken, CoinType, TokenInfoResponse};

pub const BAT_CONTRACT_ADDRESS: &str = "0x0D8775F648430679A709E98d2b0Cb6250d2887EF";

/// Basic Attention Token on Ethereum mainnet
pub fn mock_basic_attention_token() -> BlockchainToken {
    BlockchainToken {
        contract_address: BAT_CONTRACT_ADDRESS.to_string(),
        name: "Basic Attention Token".to_string(),
        symbol: "BAT".to_string(),
        decimals: 18,
        logo: "bat.png".to_string(),
        is_erc20: true,
        is_erc721: false,
        is_nft: false,
        visible: true,
        coingecko_id: "basic-attention-token".to_string(),
        chain_id: "0x1".to_string(),
        coin: CoinType::Eth,
    }
}

/// Look up token metadata for a contract address.
///
/// Only the BAT fixture is known, matched ignoring ASCII case; anything else
/// resolves to no token.
pub fn get_blockchain_token_info(contract_address: &str) -> TokenInfoResponse {
    let bat = mock_basic_attention_token();
    if contract_address.eq_ignore_ascii_case(&bat.contract_address) {
        TokenInfoResponse { token: Some(bat) }
    } else {
        TokenInfoResponse { token: None }
    }
}
