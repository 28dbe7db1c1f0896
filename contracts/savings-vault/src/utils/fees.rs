use crate::errors::VaultErrors;
use crate::events;
use crate::storage::core::{CoreState, CoreStorageFunc};
use crate::storage::shares::SharesStorageFunc;
use crate::utils::math::{mul_div, Rounding, BP};
use crate::utils::shares::mint_shares;
use soroban_sdk::{panic_with_error, Env};

pub const YEAR_IN_SECONDS: u64 = 3600 * 24 * 365;

// 10% a year
pub const MAX_AUM_FEE: u32 = 1_000;

pub fn validate_aum_fee(e: &Env, aum_fee: u32) {
    if aum_fee > MAX_AUM_FEE {
        panic_with_error!(&e, &VaultErrors::InvalidFee);
    }
}

/// Shares owed to the fee recipient for the time elapsed since the last accrual.
/// The fee dilutes holders, the assets backing the vault don't move.
pub fn pending_fee_shares(e: &Env, core_state: &CoreState) -> u128 {
    let supply: u128 = e._shares().total_supply();
    if supply == 0 || core_state.aum_fee == 0 {
        return 0;
    }

    let now: u64 = e.ledger().timestamp();
    let last_accrual: u64 = e._core().last_fee_accrual();
    if now <= last_accrual {
        return 0;
    }

    mul_div(
        supply,
        (core_state.aum_fee as u128) * ((now - last_accrual) as u128),
        BP * (YEAR_IN_SECONDS as u128),
        Rounding::Down,
    )
}

/// Total supply including the fee shares not minted yet.
pub fn supply_with_fees(e: &Env, core_state: &CoreState) -> u128 {
    e._shares().total_supply() + pending_fee_shares(e, core_state)
}

/// Mints the pending fee shares to the fee recipient and restarts the fee period.
pub fn accrue_fees(e: &Env, core_state: &CoreState) {
    let shares: u128 = pending_fee_shares(e, core_state);
    e._core().set_last_fee_accrual(&e.ledger().timestamp());

    if shares == 0 {
        return;
    }

    mint_shares(e, &core_state.fee_recipient, shares);
    events::fee(e, &core_state.fee_recipient, shares);
}
