use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultErrors {
    // Core Errors
    NotInitialized = 100,
    AlreadyInitialized = 101,
    InvalidMaxLoss = 102,
    NotEnoughMarkets = 103,
    InvalidFee = 104,

    // Access control
    Forbidden = 200,

    // Markets
    UnknownMarket = 300,

    // Economic safety
    PriceImpact = 400,
    InsufficientLiquidity = 401,

    // Shares
    ZeroAmount = 500,
    ZeroShares = 501,
    ZeroAssets = 502,
    InsufficientShares = 503,
    InsufficientAllowance = 504,
    EmptyVault = 505,
}
