#![no_std]

mod contract;
mod events;
mod notional;
mod storage;
mod utils;

mod errors;
mod tests;

pub use crate::contract::SavingsVaultContractClient;
