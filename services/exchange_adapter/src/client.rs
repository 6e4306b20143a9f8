//! Connection handle shared by the reader and invoker halves.

use web3::contract::Contract;
use web3::transports::Http;
use web3::types::Address;
use web3::{Transport, Web3};

use crate::abi;
use crate::config::{parse_address, ExchangeConfig};
use crate::error::ExchangeError;

/// Client for one deployed exchange/token pair.
///
/// Holds no session state of its own: the signing account lives at the
/// node, and every query reflects chain state at call time.
#[derive(Debug, Clone)]
pub struct ExchangeClient<T: Transport> {
    pub(crate) web3: Web3<T>,
    pub(crate) exchange: Contract<T>,
    pub(crate) token: Contract<T>,
    pub(crate) exchange_address: Address,
    pub(crate) config: ExchangeConfig,
}

impl ExchangeClient<Http> {
    /// Connects over HTTP to the configured endpoint.
    pub fn connect(config: ExchangeConfig) -> Result<Self, ExchangeError> {
        let transport = Http::new(&config.rpc_url)?;
        Self::new(Web3::new(transport), config)
    }
}

impl<T: Transport> ExchangeClient<T> {
    /// Builds a client over an existing transport.
    pub fn new(web3: Web3<T>, config: ExchangeConfig) -> Result<Self, ExchangeError> {
        config.validate()?;
        let exchange_address = parse_address(&config.exchange_address)?;
        let token_address = parse_address(&config.token_address)?;

        let exchange = Contract::new(web3.eth(), exchange_address, abi::exchange().clone());
        let token = Contract::new(web3.eth(), token_address, abi::erc20().clone());

        Ok(Self {
            web3,
            exchange,
            token,
            exchange_address,
            config,
        })
    }

    /// Address of the deployed exchange contract.
    pub fn exchange_address(&self) -> Address {
        self.exchange_address
    }

    /// Active configuration.
    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }
}
