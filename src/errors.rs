use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletMockError {
    #[error("invalid derivation range: start index {start} is past stop index {stop}")]
    InvalidRange { start: u32, stop: u32 },
    #[error("derivation index {0} does not fit a hardened account index")]
    IndexOutOfRange(u32),
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

pub type MockResult<T> = Result<T, WalletMockError>;
