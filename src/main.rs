use anyhow::{Context, Result};
use std::env;
use tracing::info;
use wallet_mock::{HardwareWalletConnectOptions, MockConfig, MockWalletBackend};

const DEFAULT_START_INDEX: u32 = 0;
const DEFAULT_STOP_INDEX: u32 = 3;

/// Read an index from the command line, then the environment, then the default
fn index_arg(arg: Option<String>, var: &str, default: u32) -> Result<u32> {
    match arg.or_else(|| env::var(var).ok()) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} is not a valid index: {}", var, value)),
        None => Ok(default),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut args = env::args().skip(1);
    let start = index_arg(args.next(), "MOCK_START_INDEX", DEFAULT_START_INDEX)?;
    let stop = index_arg(args.next(), "MOCK_STOP_INDEX", DEFAULT_STOP_INDEX)?;

    let config = MockConfig::from_env()?;
    let backend = MockWalletBackend::new(config);
    let accounts = backend
        .try_connect_hardware_wallet(&HardwareWalletConnectOptions::new(start, stop))
        .await?;

    info!("Derived {} mock accounts for range {}..{}", accounts.len(), start, stop);
    println!("{}", serde_json::to_string_pretty(&accounts)?);

    Ok(())
}
