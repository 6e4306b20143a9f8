//! Configuration for the exchange client.

use serde::{Deserialize, Serialize};
use web3::types::Address;

use crate::error::ExchangeError;

/// Connection and contract parameters for one exchange/token deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// JSON-RPC endpoint of the node carrying the session account
    pub rpc_url: String,

    /// Deployed exchange contract (parsed to Address when needed)
    pub exchange_address: String,

    /// ERC-20 token traded against ether on the exchange
    pub token_address: String,

    /// Pool fee in basis points, matching the deployed contract (30 = 0.3%)
    pub fee_bps: u32,

    /// Block confirmations to wait for on state-changing calls
    pub confirmations: usize,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            exchange_address: "0x0000000000000000000000000000000000000000".to_string(),
            token_address: "0x0000000000000000000000000000000000000000".to_string(),
            fee_bps: 30,
            confirmations: 1,
        }
    }
}

impl ExchangeConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(rpc_url) = std::env::var("EXCHANGE_RPC_URL") {
            config.rpc_url = rpc_url;
        }
        if let Ok(address) = std::env::var("EXCHANGE_CONTRACT_ADDRESS") {
            config.exchange_address = address;
        }
        if let Ok(address) = std::env::var("EXCHANGE_TOKEN_ADDRESS") {
            config.token_address = address;
        }
        if let Ok(fee) = std::env::var("EXCHANGE_FEE_BPS") {
            if let Ok(value) = fee.parse::<u32>() {
                config.fee_bps = value;
            }
        }
        if let Ok(confirmations) = std::env::var("EXCHANGE_CONFIRMATIONS") {
            if let Ok(value) = confirmations.parse::<usize>() {
                config.confirmations = value;
            }
        }

        config
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ExchangeError> {
        if self.rpc_url.is_empty() {
            return Err(ExchangeError::Config("rpc_url must not be empty".into()));
        }
        if self.fee_bps > 10_000 {
            return Err(ExchangeError::Config(
                "fee_bps must be <= 10000 (100%)".into(),
            ));
        }
        parse_address(&self.exchange_address)?;
        parse_address(&self.token_address)?;
        Ok(())
    }
}

pub(crate) fn parse_address(raw: &str) -> Result<Address, ExchangeError> {
    raw.trim_start_matches("0x")
        .parse::<Address>()
        .map_err(|_| ExchangeError::Config(format!("invalid contract address: {}", raw)))
}
