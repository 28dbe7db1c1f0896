use crate::errors::VaultErrors;
use crate::notional::{MarketParameters, NotionalRouterClient, WrappedFCashClient};
use crate::storage::core::CoreState;
use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NotionalMarket {
    pub maturity: u64,
    pub oracle_rate: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortedMarkets {
    pub lowest_yield_market: NotionalMarket,
    pub highest_yield_market: NotionalMarket,
}

/// A tracked position together with the market it currently sits in.
#[derive(Clone, Debug)]
pub struct RankedPosition {
    pub position: Address,
    pub market: NotionalMarket,
}

pub fn active_markets(e: &Env, core_state: &CoreState) -> Vec<MarketParameters> {
    NotionalRouterClient::new(e, &core_state.notional_router)
        .get_active_markets(&core_state.currency_id)
}

pub fn tracked_position(e: &Env, core_state: &CoreState, index: u32) -> Address {
    core_state.fcash_positions.get(index).unwrap_or_else(|| {
        panic_with_error!(&e, &VaultErrors::NotInitialized);
    })
}

/// Resolves the market of a position. Matured positions yield nothing, so their rate is zero.
pub fn position_market(
    e: &Env,
    markets: &Vec<MarketParameters>,
    position: &Address,
) -> NotionalMarket {
    let fcash = WrappedFCashClient::new(e, position);
    let maturity: u64 = fcash.get_maturity();

    if fcash.has_matured() {
        return NotionalMarket {
            maturity,
            oracle_rate: 0,
        };
    }

    for market in markets.iter() {
        if market.maturity == maturity {
            return NotionalMarket {
                maturity,
                oracle_rate: market.oracle_rate,
            };
        }
    }

    panic_with_error!(&e, &VaultErrors::UnknownMarket);
}

/// Returns the two tracked positions as (lowest yield, highest yield).
/// On equal rates the storage order is kept.
pub fn rank_positions(e: &Env, core_state: &CoreState) -> (RankedPosition, RankedPosition) {
    let markets: Vec<MarketParameters> = active_markets(e, core_state);

    let first_position: Address = tracked_position(e, core_state, 0);
    let second_position: Address = tracked_position(e, core_state, 1);

    let first = RankedPosition {
        market: position_market(e, &markets, &first_position),
        position: first_position,
    };
    let second = RankedPosition {
        market: position_market(e, &markets, &second_position),
        position: second_position,
    };

    if second.market.oracle_rate < first.market.oracle_rate {
        (second, first)
    } else {
        (first, second)
    }
}

pub fn sort_markets_by_oracle_rate(e: &Env, core_state: &CoreState) -> SortedMarkets {
    let (lowest, highest) = rank_positions(e, core_state);
    SortedMarkets {
        lowest_yield_market: lowest.market,
        highest_yield_market: highest.market,
    }
}

/// The longest active market that isn't tracked yet.
pub fn replacement_maturity(e: &Env, core_state: &CoreState) -> u64 {
    let mut tracked: Vec<u64> = Vec::new(e);
    for position in core_state.fcash_positions.iter() {
        tracked.push_back(WrappedFCashClient::new(e, &position).get_maturity());
    }

    let mut selected: Option<u64> = None;
    for market in active_markets(e, core_state).iter() {
        if tracked.contains(market.maturity) {
            continue;
        }

        if selected.map_or(true, |maturity| market.maturity > maturity) {
            selected = Some(market.maturity);
        }
    }

    selected.unwrap_or_else(|| {
        panic_with_error!(&e, &VaultErrors::UnknownMarket);
    })
}
