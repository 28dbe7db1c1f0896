use crate::storage::roles::Role;
use soroban_sdk::{symbol_short, Address, Env};

pub fn deposit(e: &Env, caller: &Address, receiver: &Address, assets: u128, shares: u128) {
    e.events().publish(
        (symbol_short!("deposit"), caller.clone(), receiver.clone()),
        (assets, shares),
    );
}

pub fn withdraw(
    e: &Env,
    caller: &Address,
    receiver: &Address,
    owner: &Address,
    assets: u128,
    shares: u128,
) {
    e.events().publish(
        (
            symbol_short!("withdraw"),
            caller.clone(),
            receiver.clone(),
            owner.clone(),
        ),
        (assets, shares),
    );
}

pub fn harvest(e: &Env, position: &Address, assets: u128, fcash: u128) {
    e.events()
        .publish((symbol_short!("harvest"), position.clone()), (assets, fcash));
}

pub fn rotate(e: &Env, matured: &Address, replacement: &Address, redeemed: u128) {
    e.events().publish(
        (symbol_short!("rotate"), matured.clone(), replacement.clone()),
        redeemed,
    );
}

pub fn max_loss(e: &Env, max_loss: u32) {
    e.events().publish((symbol_short!("max_loss"),), max_loss);
}

pub fn role_grant(e: &Env, role: &Role, account: &Address) {
    e.events().publish(
        (symbol_short!("role_grnt"), role.clone()),
        account.clone(),
    );
}

pub fn role_revoke(e: &Env, role: &Role, account: &Address) {
    e.events().publish(
        (symbol_short!("role_rvk"), role.clone()),
        account.clone(),
    );
}

pub fn fee(e: &Env, fee_recipient: &Address, shares: u128) {
    e.events()
        .publish((symbol_short!("fee"), fee_recipient.clone()), shares);
}

pub fn aum_fee(e: &Env, aum_fee: u32) {
    e.events().publish((symbol_short!("aum_fee"),), aum_fee);
}

pub fn fee_recipient(e: &Env, fee_recipient: &Address) {
    e.events()
        .publish((symbol_short!("fee_recip"),), fee_recipient.clone());
}
