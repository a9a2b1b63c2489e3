/// Translate an NFT asset URL to its gateway form. The mock leaves it untouched.
pub fn translate_to_nft_gateway(url: Option<&str>) -> Option<String> {
    url.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough() {
        assert_eq!(
            translate_to_nft_gateway(Some("ipfs://bafy/1.png")),
            Some("ipfs://bafy/1.png".to_string())
        );
    }

    #[test]
    fn test_none_stays_none() {
        assert_eq!(translate_to_nft_gateway(None), None);
    }
}
