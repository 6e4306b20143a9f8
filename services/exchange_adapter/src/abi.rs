//! Contract ABI fragments for the exchange and its ERC-20 token.
//!
//! Only the functions this client actually encodes are carried; the full
//! interfaces live with the deployed contracts.

use once_cell::sync::Lazy;

/// Exchange contract surface: liquidity management, swaps, and the
/// read-only pricing/reserve helpers. The exchange doubles as the ERC-20
/// LP token, hence `balanceOf`/`totalSupply`.
pub const EXCHANGE_ABI: &str = r#"[
    {"type":"function","name":"addLiquidity","stateMutability":"payable","inputs":[{"name":"amount","type":"uint256"}],"outputs":[{"name":"","type":"uint256"}]},
    {"type":"function","name":"removeLiquidity","stateMutability":"nonpayable","inputs":[{"name":"amount","type":"uint256"}],"outputs":[{"name":"","type":"uint256"},{"name":"","type":"uint256"}]},
    {"type":"function","name":"ethToToken","stateMutability":"payable","inputs":[{"name":"minTokens","type":"uint256"}],"outputs":[]},
    {"type":"function","name":"tokenToEth","stateMutability":"nonpayable","inputs":[{"name":"tokensSold","type":"uint256"},{"name":"minEth","type":"uint256"}],"outputs":[]},
    {"type":"function","name":"getAmountOfTokens","stateMutability":"pure","inputs":[{"name":"inputAmount","type":"uint256"},{"name":"inputReserve","type":"uint256"},{"name":"outputReserve","type":"uint256"}],"outputs":[{"name":"","type":"uint256"}]},
    {"type":"function","name":"getReserve","stateMutability":"view","inputs":[],"outputs":[{"name":"","type":"uint256"}]},
    {"type":"function","name":"balanceOf","stateMutability":"view","inputs":[{"name":"owner","type":"address"}],"outputs":[{"name":"","type":"uint256"}]},
    {"type":"function","name":"totalSupply","stateMutability":"view","inputs":[],"outputs":[{"name":"","type":"uint256"}]}
]"#;

/// ERC-20 surface needed for the approve-then-transfer flow.
pub const ERC20_ABI: &str = r#"[
    {"type":"function","name":"approve","stateMutability":"nonpayable","inputs":[{"name":"spender","type":"address"},{"name":"amount","type":"uint256"}],"outputs":[{"name":"","type":"bool"}]},
    {"type":"function","name":"allowance","stateMutability":"view","inputs":[{"name":"owner","type":"address"},{"name":"spender","type":"address"}],"outputs":[{"name":"","type":"uint256"}]},
    {"type":"function","name":"balanceOf","stateMutability":"view","inputs":[{"name":"owner","type":"address"}],"outputs":[{"name":"","type":"uint256"}]}
]"#;

static EXCHANGE: Lazy<ethabi::Contract> = Lazy::new(|| {
    serde_json::from_str(EXCHANGE_ABI).expect("exchange ABI fragment is well formed")
});

static ERC20: Lazy<ethabi::Contract> =
    Lazy::new(|| serde_json::from_str(ERC20_ABI).expect("ERC-20 ABI fragment is well formed"));

/// Parsed exchange interface.
pub fn exchange() -> &'static ethabi::Contract {
    &EXCHANGE
}

/// Parsed ERC-20 interface.
pub fn erc20() -> &'static ethabi::Contract {
    &ERC20
}
