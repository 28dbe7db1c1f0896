use crate::storage::core::{BUMP_CONSTANT, BUMP_CONSTANT_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,
    VaultManager,
    Harvester,
}

#[contracttype]
pub enum RolesDataKeys {
    Member((Role, Address)),
}

pub struct Roles {
    pub env: Env,
}

impl Roles {
    #[inline(always)]
    fn new(e: &Env) -> Roles {
        Roles { env: e.clone() }
    }

    pub fn has(&self, role: &Role, account: &Address) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&RolesDataKeys::Member((role.clone(), account.clone())))
    }

    pub fn grant(&self, role: &Role, account: &Address) {
        let key = RolesDataKeys::Member((role.clone(), account.clone()));
        self.env.storage().persistent().set(&key, &true);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, BUMP_CONSTANT_THRESHOLD, BUMP_CONSTANT);
    }

    pub fn revoke(&self, role: &Role, account: &Address) {
        self.env
            .storage()
            .persistent()
            .remove(&RolesDataKeys::Member((role.clone(), account.clone())));
    }

    pub fn bump(&self, role: &Role, account: &Address) {
        self.env.storage().persistent().extend_ttl(
            &RolesDataKeys::Member((role.clone(), account.clone())),
            BUMP_CONSTANT_THRESHOLD,
            BUMP_CONSTANT,
        );
    }
}

pub trait RolesStorageFunc {
    fn _roles(&self) -> Roles;
}

impl RolesStorageFunc for Env {
    #[inline(always)]
    fn _roles(&self) -> Roles {
        Roles::new(self)
    }
}
