use soroban_sdk::{contracttype, Address, Env, String, Vec};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 30;
pub const BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 15;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoreState {
    pub asset: Address,
    pub currency_id: u32,
    pub wrapped_fcash_factory: Address,
    pub notional_router: Address,

    // Basis points of value a trade must keep, 9800 means at most 2% can be lost
    pub max_loss: u32,
    pub fee_recipient: Address,

    // Yearly management fee in basis points, paid in newly minted shares
    pub aum_fee: u32,

    pub name: String,
    pub symbol: String,

    // Always two wrapped fCash tokens
    pub fcash_positions: Vec<Address>,
}

#[contracttype]
pub enum CoreDataKeys {
    CoreState,
    LastFeeAccrual,
}

pub struct Core {
    pub env: Env,
}

impl Core {
    #[inline(always)]
    pub fn new(e: &Env) -> Core {
        Core { env: e.clone() }
    }

    pub fn state(&self) -> Option<CoreState> {
        self.env.storage().instance().get(&CoreDataKeys::CoreState)
    }

    pub fn set_state(&self, core_state: &CoreState) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::CoreState, core_state);
    }

    pub fn last_fee_accrual(&self) -> u64 {
        self.env
            .storage()
            .instance()
            .get(&CoreDataKeys::LastFeeAccrual)
            .unwrap_or(0)
    }

    pub fn set_last_fee_accrual(&self, timestamp: &u64) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::LastFeeAccrual, timestamp);
    }

    pub fn bump(&self) {
        self.env
            .storage()
            .instance()
            .extend_ttl(BUMP_CONSTANT_THRESHOLD, BUMP_CONSTANT);
    }
}

pub trait CoreStorageFunc {
    fn _core(&self) -> Core;
}

impl CoreStorageFunc for Env {
    #[inline(always)]
    fn _core(&self) -> Core {
        Core::new(self)
    }
}
