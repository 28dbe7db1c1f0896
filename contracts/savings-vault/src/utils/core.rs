use crate::errors::VaultErrors;
use crate::storage::core::{CoreState, CoreStorageFunc};
use crate::storage::roles::{Role, RolesStorageFunc};
use crate::utils::math::is_valid_max_loss;
use soroban_sdk::{panic_with_error, Address, Env};

pub fn can_init_contract(e: &Env) {
    if e._core().state().is_some() {
        panic_with_error!(&e, &VaultErrors::AlreadyInitialized);
    }
}

pub fn get_core_state(e: &Env) -> CoreState {
    e._core().state().unwrap_or_else(|| {
        panic_with_error!(&e, &VaultErrors::NotInitialized);
    })
}

/// Requires the signature of `caller` and that it holds `role`.
pub fn validate(e: &Env, caller: &Address, role: Role) {
    caller.require_auth();

    if !e._roles().has(&role, caller) {
        panic_with_error!(&e, &VaultErrors::Forbidden);
    }

    e._roles().bump(&role, caller);
}

pub fn validate_max_loss(e: &Env, max_loss: u32) {
    if !is_valid_max_loss(max_loss) {
        panic_with_error!(&e, &VaultErrors::InvalidMaxLoss);
    }
}
