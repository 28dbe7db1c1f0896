use crate::errors::VaultErrors;
use crate::notional::{MarketParameters, WrappedFCashClient};
use crate::storage::core::CoreState;
use crate::storage::shares::SharesStorageFunc;
use crate::utils::fees::supply_with_fees;
use crate::utils::markets::{active_markets, position_market};
use crate::utils::math::{to_assets, to_shares, Rounding};
use soroban_sdk::{panic_with_error, token, Address, Env, Vec};

pub fn idle_assets(e: &Env, core_state: &CoreState) -> u128 {
    token::Client::new(e, &core_state.asset).balance(&e.current_contract_address()) as u128
}

pub fn position_balance(e: &Env, position: &Address) -> u128 {
    WrappedFCashClient::new(e, position).balance(&e.current_contract_address()) as u128
}

/// Idle assets plus every position valued at the oracle rate.
pub fn total_assets(e: &Env, core_state: &CoreState) -> u128 {
    let mut total: u128 = idle_assets(e, core_state);

    for position in core_state.fcash_positions.iter() {
        let balance: u128 = position_balance(e, &position);
        if balance > 0 {
            total += WrappedFCashClient::new(e, &position).convert_to_assets(&(balance as i128))
                as u128;
        }
    }

    total
}

/// Idle assets plus what every position would return if redeemed right now.
pub fn spot_assets(e: &Env, core_state: &CoreState) -> u128 {
    let mut total: u128 = idle_assets(e, core_state);

    for position in core_state.fcash_positions.iter() {
        let balance: u128 = position_balance(e, &position);
        if balance > 0 {
            total +=
                WrappedFCashClient::new(e, &position).preview_redeem(&(balance as i128)) as u128;
        }
    }

    total
}

/// Assets backing exits, the lower of the oracle and the spot valuation.
pub fn exit_assets(e: &Env, core_state: &CoreState) -> u128 {
    let total: u128 = total_assets(e, core_state);
    let spot: u128 = spot_assets(e, core_state);
    if spot < total {
        spot
    } else {
        total
    }
}

fn shares_for(e: &Env, assets: u128, supply: u128, backing: u128, rounding: Rounding) -> u128 {
    to_shares(assets, supply, backing, rounding).unwrap_or_else(|| {
        panic_with_error!(&e, &VaultErrors::EmptyVault);
    })
}

pub fn convert_to_shares(e: &Env, core_state: &CoreState, assets: u128) -> u128 {
    let supply: u128 = supply_with_fees(e, core_state);
    if supply == 0 {
        return assets;
    }

    shares_for(e, assets, supply, total_assets(e, core_state), Rounding::Down)
}

pub fn convert_to_assets(e: &Env, core_state: &CoreState, shares: u128) -> u128 {
    let supply: u128 = supply_with_fees(e, core_state);
    if supply == 0 {
        return shares;
    }

    to_assets(shares, supply, total_assets(e, core_state), Rounding::Down)
}

pub fn preview_deposit(e: &Env, core_state: &CoreState, assets: u128) -> u128 {
    convert_to_shares(e, core_state, assets)
}

pub fn preview_mint(e: &Env, core_state: &CoreState, shares: u128) -> u128 {
    let supply: u128 = supply_with_fees(e, core_state);
    if supply == 0 {
        return shares;
    }

    let total: u128 = total_assets(e, core_state);
    if total == 0 {
        panic_with_error!(&e, &VaultErrors::EmptyVault);
    }

    to_assets(shares, supply, total, Rounding::Up)
}

pub fn preview_withdraw(e: &Env, core_state: &CoreState, assets: u128) -> u128 {
    let supply: u128 = supply_with_fees(e, core_state);
    if supply == 0 {
        return assets;
    }

    shares_for(e, assets, supply, exit_assets(e, core_state), Rounding::Up)
}

pub fn preview_redeem(e: &Env, core_state: &CoreState, shares: u128) -> u128 {
    let supply: u128 = supply_with_fees(e, core_state);
    if supply == 0 {
        return shares;
    }

    let exit: u128 = exit_assets(e, core_state);
    if exit == 0 {
        panic_with_error!(&e, &VaultErrors::EmptyVault);
    }

    to_assets(shares, supply, exit, Rounding::Down)
}

/// Assets the owner could take out right now, zero if the vault holds nothing to exit with.
pub fn max_withdraw(e: &Env, core_state: &CoreState, owner: &Address) -> u128 {
    let shares: u128 = e._shares().balance(owner);
    if shares == 0 {
        return 0;
    }

    let supply: u128 = supply_with_fees(e, core_state);
    let exit: u128 = exit_assets(e, core_state);
    if exit == 0 {
        return 0;
    }

    to_assets(shares, supply, exit, Rounding::Down)
}

/// Oracle rate of the vault weighted by the oracle value of each position.
/// Idle assets and matured positions earn nothing.
pub fn get_apy(e: &Env, core_state: &CoreState) -> u128 {
    let total: u128 = total_assets(e, core_state);
    if total == 0 {
        return 0;
    }

    let markets: Vec<MarketParameters> = active_markets(e, core_state);
    let mut weighted: u128 = 0;
    for position in core_state.fcash_positions.iter() {
        let balance: u128 = position_balance(e, &position);
        if balance == 0 {
            continue;
        }

        let value: u128 =
            WrappedFCashClient::new(e, &position).convert_to_assets(&(balance as i128)) as u128;
        weighted += value * position_market(e, &markets, &position).oracle_rate;
    }

    weighted / total
}
