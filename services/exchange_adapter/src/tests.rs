//! Unit tests for configuration, ABI fragments, units, and receipt checks.

use web3::types::U256;

use crate::config::ExchangeConfig;
use crate::error::ExchangeError;
use crate::invoker::check_receipt;
use crate::types::{Reserves, SwapDirection};
use crate::units::{format_units, parse_ether, parse_units, UnitsError};
use crate::{abi, ExchangeClient};

fn receipt_with_status(status: u64) -> web3::types::TransactionReceipt {
    serde_json::from_value(serde_json::json!({
        "transactionHash": "0x0000000000000000000000000000000000000000000000000000000000000001",
        "transactionIndex": "0x0",
        "blockHash": "0x0000000000000000000000000000000000000000000000000000000000000002",
        "blockNumber": "0x1",
        "from": "0x0000000000000000000000000000000000000001",
        "to": "0x0000000000000000000000000000000000000002",
        "cumulativeGasUsed": "0x0",
        "gasUsed": "0x0",
        "contractAddress": null,
        "logs": [],
        "status": format!("0x{:x}", status),
        "root": null,
        "type": null,
        "effectiveGasPrice": null,
        "logsBloom": format!("0x{}", "00".repeat(256)),
    }))
    .expect("receipt fixture is well formed")
}

#[test]
fn test_default_config_validates() {
    let config = ExchangeConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_rejects_bad_address() {
    let config = ExchangeConfig {
        exchange_address: "not-an-address".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ExchangeError::Config(_))
    ));
}

#[test]
fn test_config_rejects_excessive_fee() {
    let config = ExchangeConfig {
        fee_bps: 10_001,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = ExchangeConfig::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let deserialized: ExchangeConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(config.rpc_url, deserialized.rpc_url);
    assert_eq!(config.fee_bps, deserialized.fee_bps);
}

#[test]
fn test_env_override() {
    std::env::set_var("EXCHANGE_FEE_BPS", "100");
    std::env::set_var("EXCHANGE_CONFIRMATIONS", "3");

    let config = ExchangeConfig::from_env();

    assert_eq!(config.fee_bps, 100);
    assert_eq!(config.confirmations, 3);

    // Cleanup
    std::env::remove_var("EXCHANGE_FEE_BPS");
    std::env::remove_var("EXCHANGE_CONFIRMATIONS");
}

#[test]
fn test_exchange_abi_carries_called_functions() {
    for name in [
        "addLiquidity",
        "removeLiquidity",
        "ethToToken",
        "tokenToEth",
        "getAmountOfTokens",
        "getReserve",
        "balanceOf",
        "totalSupply",
    ] {
        assert!(abi::exchange().function(name).is_ok(), "missing {}", name);
    }
}

#[test]
fn test_erc20_abi_carries_called_functions() {
    for name in ["approve", "allowance", "balanceOf"] {
        assert!(abi::erc20().function(name).is_ok(), "missing {}", name);
    }
}

#[test]
fn test_client_rejects_invalid_config() {
    let config = ExchangeConfig {
        token_address: "0x123".to_string(),
        ..Default::default()
    };
    let transport = web3::transports::Http::new("http://127.0.0.1:8545").unwrap();
    let result = ExchangeClient::new(web3::Web3::new(transport), config);
    assert!(matches!(result, Err(ExchangeError::Config(_))));
}

#[test]
fn test_parse_ether() {
    assert_eq!(
        parse_ether("1.5").unwrap(),
        U256::from(1_500_000_000_000_000_000u64)
    );
    assert_eq!(parse_ether("0").unwrap(), U256::zero());
    assert_eq!(
        parse_ether("0.000000000000000001").unwrap(),
        U256::one()
    );
}

#[test]
fn test_parse_units_edge_forms() {
    assert_eq!(parse_units("42", 0).unwrap(), U256::from(42u64));
    assert_eq!(parse_units(".5", 1).unwrap(), U256::from(5u64));
    assert_eq!(parse_units("7.", 2).unwrap(), U256::from(700u64));
}

#[test]
fn test_parse_units_rejects_garbage() {
    assert!(matches!(
        parse_units("abc", 18),
        Err(UnitsError::InvalidNumber(_))
    ));
    assert!(matches!(
        parse_units("", 18),
        Err(UnitsError::InvalidNumber(_))
    ));
    assert!(matches!(
        parse_units("-1", 18),
        Err(UnitsError::InvalidNumber(_))
    ));
    assert!(matches!(
        parse_units("1.23", 1),
        Err(UnitsError::PrecisionLoss(_, 1))
    ));
}

#[test]
fn test_format_units() {
    assert_eq!(
        format_units(U256::from(1_500_000_000_000_000_000u64), 18),
        "1.5"
    );
    assert_eq!(format_units(U256::one(), 18), "0.000000000000000001");
    assert_eq!(format_units(U256::from(42u64), 0), "42");
    assert_eq!(format_units(U256::from(2_000u64), 3), "2");
}

#[test]
fn test_units_roundtrip() {
    let wei = parse_units("123.456", 18).unwrap();
    assert_eq!(format_units(wei, 18), "123.456");
}

#[test]
fn test_check_receipt_accepts_success() {
    assert!(check_receipt(receipt_with_status(1)).is_ok());
}

#[test]
fn test_check_receipt_rejects_revert() {
    let result = check_receipt(receipt_with_status(0));
    assert!(matches!(result, Err(ExchangeError::Reverted(_))));
}

#[test]
fn test_reserves_ordering() {
    let reserves = Reserves {
        ether: U256::from(1u64),
        token: U256::from(2u64),
    };
    assert_eq!(
        reserves.ordered_for(SwapDirection::EthToToken),
        (U256::from(1u64), U256::from(2u64))
    );
    assert_eq!(
        reserves.ordered_for(SwapDirection::TokenToEth),
        (U256::from(2u64), U256::from(1u64))
    );
}
