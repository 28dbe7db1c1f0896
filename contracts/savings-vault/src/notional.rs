//! Interfaces of the lending protocol contracts the vault talks to.
//!
//! The router reports the active fixed rate markets of a currency, the factory
//! resolves the wrapped fCash token of a (currency, maturity) pair and each
//! wrapped fCash token is an ERC-4626 like position redeemable for the asset.

use soroban_sdk::{contractclient, contracttype, Address, Env, Vec};

/// One active fixed rate market as reported by the router.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketParameters {
    pub maturity: u64,
    // Annualized oracle rate, 1_0000000 = 1%
    pub oracle_rate: u128,
}

#[contractclient(name = "NotionalRouterClient")]
pub trait NotionalRouterInterface {
    fn get_active_markets(e: Env, currency_id: u32) -> Vec<MarketParameters>;
}

#[contractclient(name = "WrappedFCashFactoryClient")]
pub trait WrappedFCashFactoryInterface {
    /// Returns the wrapper of the market, deploying it if it doesn't exist yet.
    fn deploy_wrapper(e: Env, currency_id: u32, maturity: u64) -> Address;
}

#[contractclient(name = "WrappedFCashClient")]
pub trait WrappedFCashInterface {
    fn balance(e: Env, id: Address) -> i128;
    fn get_maturity(e: Env) -> u64;
    fn has_matured(e: Env) -> bool;

    // Oracle valuation
    fn convert_to_assets(e: Env, shares: i128) -> i128;
    fn convert_to_shares(e: Env, assets: i128) -> i128;

    // Spot quotes, these include the market's price impact
    fn preview_deposit(e: Env, assets: i128) -> i128;
    fn preview_redeem(e: Env, shares: i128) -> i128;

    /// Pulls `assets` from `from` and lends them, crediting the fCash to `receiver`.
    fn deposit(e: Env, from: Address, assets: i128, receiver: Address) -> i128;

    /// Burns `shares` of `owner` and sends the redeemed assets to `receiver`.
    fn redeem(e: Env, owner: Address, shares: i128, receiver: Address) -> i128;
}
