use crate::errors::VaultErrors;
use crate::storage::shares::SharesStorageFunc;
use soroban_sdk::{panic_with_error, Address, Env};

pub fn mint_shares(e: &Env, to: &Address, amount: u128) {
    let balance: u128 = e._shares().balance(to);
    e._shares().set_balance(to, &(balance + amount));

    let supply: u128 = e._shares().total_supply();
    e._shares().set_total_supply(&(supply + amount));
}

pub fn burn_shares(e: &Env, from: &Address, amount: u128) {
    let balance: u128 = e._shares().balance(from);
    if balance < amount {
        panic_with_error!(&e, &VaultErrors::InsufficientShares);
    }

    e._shares().set_balance(from, &(balance - amount));

    let supply: u128 = e._shares().total_supply();
    e._shares().set_total_supply(&(supply - amount));
}

pub fn transfer_shares(e: &Env, from: &Address, to: &Address, amount: u128) {
    let from_balance: u128 = e._shares().balance(from);
    if from_balance < amount {
        panic_with_error!(&e, &VaultErrors::InsufficientShares);
    }

    e._shares().set_balance(from, &(from_balance - amount));
    let to_balance: u128 = e._shares().balance(to);
    e._shares().set_balance(to, &(to_balance + amount));
}

pub fn spend_allowance(e: &Env, owner: &Address, spender: &Address, amount: u128) {
    let allowance: u128 = e._shares().allowance(owner, spender);
    if allowance < amount {
        panic_with_error!(&e, &VaultErrors::InsufficientAllowance);
    }

    e._shares()
        .set_allowance(owner, spender, &(allowance - amount));
}
