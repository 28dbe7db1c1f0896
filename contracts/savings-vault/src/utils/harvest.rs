use crate::errors::VaultErrors;
use crate::events;
use crate::notional::{WrappedFCashClient, WrappedFCashFactoryClient};
use crate::storage::core::{CoreState, CoreStorageFunc};
use crate::utils::markets::{rank_positions, replacement_maturity, tracked_position};
use crate::utils::math::{within_max_loss, BP};
use crate::utils::payments::{deposit_into_position, redeem_from_position};
use crate::utils::valuation::{idle_assets, position_balance};
use soroban_sdk::{log, panic_with_error, Address, Env};

/// Redeems every matured position and replaces it with the longest untracked active market.
/// Returns true when the tracked positions changed.
pub fn rotate_matured_positions(e: &Env, core_state: &mut CoreState) -> bool {
    let factory = WrappedFCashFactoryClient::new(e, &core_state.wrapped_fcash_factory);
    let mut rotated: bool = false;

    for index in 0..core_state.fcash_positions.len() {
        let position: Address = tracked_position(e, core_state, index);
        if !WrappedFCashClient::new(e, &position).has_matured() {
            continue;
        }

        let balance: u128 = position_balance(e, &position);
        let redeemed: u128 = if balance > 0 {
            redeem_from_position(e, &position, balance)
        } else {
            0
        };

        let maturity: u64 = replacement_maturity(e, core_state);
        let replacement: Address = factory.deploy_wrapper(&core_state.currency_id, &maturity);
        core_state.fcash_positions.set(index, replacement.clone());

        events::rotate(e, &position, &replacement, redeemed);
        rotated = true;
    }

    rotated
}

/// True when lending `amount` into `position` keeps at least `max_loss` of its oracle value.
pub fn passes_price_impact(e: &Env, position: &Address, amount: u128, max_loss: u32) -> bool {
    let fcash = WrappedFCashClient::new(e, position);
    let oracle_fcash: u128 = fcash.convert_to_shares(&(amount as i128)) as u128;
    let spot_fcash: u128 = fcash.preview_deposit(&(amount as i128)) as u128;
    within_max_loss(spot_fcash, oracle_fcash, max_loss)
}

/// Lends up to `max_deposited_amount` of the idle assets into the highest yield market,
/// or the lowest one when `to_lowest_yield` is set. Returns the fCash received.
pub fn harvest(e: &Env, max_deposited_amount: u128, to_lowest_yield: bool) -> u128 {
    let mut core_state: CoreState = e._core().state().unwrap_or_else(|| {
        panic_with_error!(&e, &VaultErrors::NotInitialized);
    });

    if rotate_matured_positions(e, &mut core_state) {
        e._core().set_state(&core_state);
    }

    let (lowest, highest) = rank_positions(e, &core_state);
    let target = if to_lowest_yield { lowest } else { highest };

    let idle: u128 = idle_assets(e, &core_state);
    let amount: u128 = if idle < max_deposited_amount {
        idle
    } else {
        max_deposited_amount
    };

    if amount == 0 {
        events::harvest(e, &target.position, 0, 0);
        return 0;
    }

    if !passes_price_impact(e, &target.position, amount, core_state.max_loss) {
        panic_with_error!(&e, &VaultErrors::PriceImpact);
    }

    let fcash: u128 = deposit_into_position(e, &core_state, &target.position, amount);
    log!(e, "harvested", target.position, amount, fcash);
    events::harvest(e, &target.position, amount, fcash);

    fcash
}

/// Largest amount of the idle assets the highest yield market takes within `max_loss`.
pub fn max_deposited_amount(e: &Env, core_state: &CoreState) -> u128 {
    let idle: u128 = idle_assets(e, core_state);
    if idle == 0 {
        return 0;
    }

    let (_, highest) = rank_positions(e, core_state);
    if passes_price_impact(e, &highest.position, idle, core_state.max_loss) {
        return idle;
    }

    // `low` always passes and `high` always fails
    let mut low: u128 = 0;
    let mut high: u128 = idle;
    while high - low > 1 {
        let mid: u128 = low + (high - low) / 2;
        if passes_price_impact(e, &highest.position, mid, core_state.max_loss) {
            low = mid;
        } else {
            high = mid;
        }
    }

    low
}

pub fn slippage_from_max_loss(max_loss: u32) -> u32 {
    (BP as u32) - max_loss
}
