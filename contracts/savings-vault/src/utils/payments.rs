use crate::notional::WrappedFCashClient;
use crate::storage::core::CoreState;
use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{token, vec, Address, Env, IntoVal, Symbol, Vec};

pub fn receive_assets(e: &Env, core_state: &CoreState, from: &Address, amount: u128) {
    token::Client::new(e, &core_state.asset).transfer(
        from,
        &e.current_contract_address(),
        &(amount as i128),
    );
}

pub fn send_assets(e: &Env, core_state: &CoreState, to: &Address, amount: u128) {
    token::Client::new(e, &core_state.asset).transfer(
        &e.current_contract_address(),
        to,
        &(amount as i128),
    );
}

/// Lends `amount` of idle assets into the `position` market, returns the fCash minted.
pub fn deposit_into_position(
    e: &Env,
    core_state: &CoreState,
    position: &Address,
    amount: u128,
) -> u128 {
    let vault: Address = e.current_contract_address();

    // The wrapper pulls the assets from the vault, so the transfer is pre authorized
    e.authorize_as_current_contract(vec![
        e,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: core_state.asset.clone(),
                fn_name: Symbol::new(e, "transfer"),
                args: (vault.clone(), position.clone(), amount as i128).into_val(e),
            },
            sub_invocations: Vec::new(e),
        }),
    ]);

    WrappedFCashClient::new(e, position).deposit(&vault, &(amount as i128), &vault) as u128
}

/// Redeems `fcash` of the `position` back into the asset, returns the assets received.
pub fn redeem_from_position(e: &Env, position: &Address, fcash: u128) -> u128 {
    let vault: Address = e.current_contract_address();
    WrappedFCashClient::new(e, position).redeem(&vault, &(fcash as i128), &vault) as u128
}
