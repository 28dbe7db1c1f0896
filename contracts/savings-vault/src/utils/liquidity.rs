use crate::errors::VaultErrors;
use crate::notional::WrappedFCashClient;
use crate::storage::core::CoreState;
use crate::utils::markets::rank_positions;
use crate::utils::math::{mul_div, Rounding};
use crate::utils::payments::redeem_from_position;
use crate::utils::valuation::{idle_assets, position_balance};
use soroban_sdk::{log, panic_with_error, Env};

// Extra assets asked for on partial redemptions, covers the market's rounding
pub const REDEEM_ROUNDING_BUFFER: u128 = 2;

/// Makes sure the vault holds at least `assets` idle, redeeming fCash starting
/// with the lowest yielding position. Only what is missing gets redeemed.
pub fn free_liquidity(e: &Env, core_state: &CoreState, assets: u128) {
    let mut idle: u128 = idle_assets(e, core_state);
    if idle >= assets {
        return;
    }

    let (lowest, highest) = rank_positions(e, core_state);
    for ranked in [lowest, highest] {
        if idle >= assets {
            break;
        }

        let balance: u128 = position_balance(e, &ranked.position);
        if balance == 0 {
            continue;
        }

        let needed: u128 = assets - idle;
        let value: u128 =
            WrappedFCashClient::new(e, &ranked.position).preview_redeem(&(balance as i128)) as u128;

        let fcash: u128 = if value <= needed {
            balance
        } else {
            let partial: u128 = mul_div(
                balance,
                needed + REDEEM_ROUNDING_BUFFER,
                value,
                Rounding::Up,
            );
            if partial > balance {
                balance
            } else {
                partial
            }
        };

        if fcash == 0 {
            continue;
        }

        let redeemed: u128 = redeem_from_position(e, &ranked.position, fcash);
        log!(e, "freed liquidity", ranked.position, fcash, redeemed);
        idle = idle_assets(e, core_state);

        // Market side rounding can leave a partial redemption a few units short
        if idle < assets && fcash < balance {
            redeem_from_position(e, &ranked.position, balance - fcash);
            idle = idle_assets(e, core_state);
        }
    }

    if idle < assets {
        panic_with_error!(&e, &VaultErrors::InsufficientLiquidity);
    }
}
