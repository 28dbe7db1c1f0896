use crate::storage::core::{BUMP_CONSTANT, BUMP_CONSTANT_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
pub enum SharesDataKeys {
    TotalSupply,
    Balance(Address),

    // (Owner, Spender)
    Allowance((Address, Address)),
}

pub struct Shares {
    pub env: Env,
}

impl Shares {
    #[inline(always)]
    fn new(e: &Env) -> Shares {
        Shares { env: e.clone() }
    }

    pub fn total_supply(&self) -> u128 {
        self.env
            .storage()
            .instance()
            .get(&SharesDataKeys::TotalSupply)
            .unwrap_or(0)
    }

    pub fn set_total_supply(&self, amount: &u128) {
        self.env
            .storage()
            .instance()
            .set(&SharesDataKeys::TotalSupply, amount);
    }

    pub fn balance(&self, id: &Address) -> u128 {
        self.env
            .storage()
            .persistent()
            .get(&SharesDataKeys::Balance(id.clone()))
            .unwrap_or(0)
    }

    pub fn set_balance(&self, id: &Address, amount: &u128) {
        let key = SharesDataKeys::Balance(id.clone());
        self.env.storage().persistent().set(&key, amount);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, BUMP_CONSTANT_THRESHOLD, BUMP_CONSTANT);
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> u128 {
        self.env
            .storage()
            .persistent()
            .get(&SharesDataKeys::Allowance((owner.clone(), spender.clone())))
            .unwrap_or(0)
    }

    pub fn set_allowance(&self, owner: &Address, spender: &Address, amount: &u128) {
        let key = SharesDataKeys::Allowance((owner.clone(), spender.clone()));
        if *amount == 0 {
            self.env.storage().persistent().remove(&key);
            return;
        }

        self.env.storage().persistent().set(&key, amount);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, BUMP_CONSTANT_THRESHOLD, BUMP_CONSTANT);
    }
}

pub trait SharesStorageFunc {
    fn _shares(&self) -> Shares;
}

impl SharesStorageFunc for Env {
    #[inline(always)]
    fn _shares(&self) -> Shares {
        Shares::new(self)
    }
}
