use num_integer::{div_ceil, div_floor};

/// Basis points denominator, 10_000 = 100%
pub const BP: u128 = 10_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rounding {
    Down,
    Up,
}

pub fn mul_div(value: u128, numerator: u128, denominator: u128, rounding: Rounding) -> u128 {
    match rounding {
        Rounding::Down => div_floor(value * numerator, denominator),
        Rounding::Up => div_ceil(value * numerator, denominator),
    }
}

/// Shares worth `assets` given the vault's supply and the assets backing it.
/// Returns `None` when shares exist but nothing backs them.
pub fn to_shares(assets: u128, supply: u128, backing: u128, rounding: Rounding) -> Option<u128> {
    if supply == 0 {
        return Some(assets);
    }

    if backing == 0 {
        return None;
    }

    Some(mul_div(assets, supply, backing, rounding))
}

/// Assets worth `shares` given the vault's supply and the assets backing it.
pub fn to_assets(shares: u128, supply: u128, backing: u128, rounding: Rounding) -> u128 {
    if supply == 0 {
        return shares;
    }

    mul_div(shares, backing, supply, rounding)
}

/// True when `realized` keeps at least `max_loss` basis points of `expected`.
pub fn within_max_loss(realized: u128, expected: u128, max_loss: u32) -> bool {
    realized * BP >= expected * (max_loss as u128)
}

pub fn is_valid_max_loss(max_loss: u32) -> bool {
    max_loss > 0 && (max_loss as u128) <= BP
}
