//! Exchange client adapter
//!
//! Client-side helpers for a constant product exchange contract: preview
//! quotes, balance/reserve reads, and the approve-then-act transaction
//! flows, all over a caller-supplied JSON-RPC transport. This crate owns no
//! state; the deployed contract's ledger is the single source of truth.
//!
//! Features:
//! - Async contract calls with per-step confirmation waits
//! - Uniform failure sentinel on reads: log the error, return `None`
//! - Idempotent allowance handling for token-denominated legs
//! - Wei-exact previews via the `amm` quote crate

pub mod abi;
pub mod client;
pub mod config;
pub mod error;
pub mod invoker;
pub mod reader;
pub mod types;
pub mod units;

pub use client::ExchangeClient;
pub use config::ExchangeConfig;
pub use error::ExchangeError;
pub use types::{Reserves, SwapDirection};
pub use units::{format_units, parse_ether, parse_units, UnitsError};

#[cfg(test)]
mod tests;
