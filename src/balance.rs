//! Canned amount lookups: native balance and ERC-20 allowance.
//!
//! Amounts are decimal strings in the token's smallest unit, the same shape the
//! wallet backend returns them in.

/// Balance reported for every account
pub const MOCK_BALANCE: &str = "0";

pub fn mock_balance() -> String {
    MOCK_BALANCE.to_string()
}

/// Pick the allowance to report.
///
/// A non-empty `allowance_target` is echoed back; otherwise the currently
/// mocked allowance is used.
pub fn resolve_allowance(allowance_target: &str, mocked_allowance: &str) -> String {
    if allowance_target.is_empty() {
        mocked_allowance.to_string()
    } else {
        allowance_target.to_string()
    }
}
