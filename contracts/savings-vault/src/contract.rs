use crate::errors::VaultErrors;
use crate::events;
use crate::notional::{MarketParameters, NotionalRouterClient, WrappedFCashFactoryClient};
use crate::storage::core::{CoreState, CoreStorageFunc};
use crate::storage::roles::{Role, RolesStorageFunc};
use crate::storage::shares::SharesStorageFunc;
use crate::utils::core::{can_init_contract, get_core_state, validate, validate_max_loss};
use crate::utils::fees::{accrue_fees, validate_aum_fee};
use crate::utils::harvest::{self, slippage_from_max_loss};
use crate::utils::liquidity::free_liquidity;
use crate::utils::markets::{self, SortedMarkets};
use crate::utils::math::{to_assets, within_max_loss, Rounding, BP};
use crate::utils::payments::{receive_assets, send_assets};
use crate::utils::shares::{burn_shares, mint_shares, spend_allowance, transfer_shares};
use crate::utils::valuation;
use soroban_sdk::{
    contract, contractimpl, panic_with_error, token, Address, BytesN, Env, String, Vec,
};

pub trait SavingsVaultContractTrait {
    fn initialize(
        e: Env,
        admin: Address,
        name: String,
        symbol: String,
        asset: Address,
        currency_id: u32,
        wrapped_fcash_factory: Address,
        notional_router: Address,
        max_loss: u32,
        fee_recipient: Address,
    );
    fn upgrade(e: Env, caller: Address, hash: BytesN<32>);
    fn get_core_state(e: Env) -> CoreState;

    // Roles
    fn grant_role(e: Env, caller: Address, role: Role, account: Address);
    fn revoke_role(e: Env, caller: Address, role: Role, account: Address);
    fn has_role(e: Env, role: Role, account: Address) -> bool;

    // Risk parameters
    fn set_max_loss(e: Env, caller: Address, max_loss: u32);
    fn set_slippage(e: Env, caller: Address, slippage: u32);
    fn set_fee_recipient(e: Env, caller: Address, fee_recipient: Address);
    fn set_aum_fee(e: Env, caller: Address, aum_fee: u32);
    fn asset(e: Env) -> Address;
    fn max_loss(e: Env) -> u32;
    fn slippage(e: Env) -> u32;
    fn fee_recipient(e: Env) -> Address;
    fn aum_fee(e: Env) -> u32;

    // Markets
    fn get_fcash_positions(e: Env) -> Vec<Address>;
    fn sort_markets_by_oracle_rate(e: Env) -> SortedMarkets;

    // Valuation
    fn total_assets(e: Env) -> u128;
    fn spot_assets(e: Env) -> u128;
    fn get_apy(e: Env) -> u128;
    fn convert_to_shares(e: Env, assets: u128) -> u128;
    fn convert_to_assets(e: Env, shares: u128) -> u128;
    fn max_deposit(e: Env, receiver: Address) -> u128;
    fn max_mint(e: Env, receiver: Address) -> u128;
    fn max_withdraw(e: Env, owner: Address) -> u128;
    fn max_redeem(e: Env, owner: Address) -> u128;
    fn preview_deposit(e: Env, assets: u128) -> u128;
    fn preview_mint(e: Env, shares: u128) -> u128;
    fn preview_withdraw(e: Env, assets: u128) -> u128;
    fn preview_redeem(e: Env, shares: u128) -> u128;

    // Entries and exits
    fn deposit(e: Env, caller: Address, assets: u128, receiver: Address) -> u128;
    fn mint(e: Env, caller: Address, shares: u128, receiver: Address) -> u128;
    fn withdraw(e: Env, caller: Address, assets: u128, receiver: Address, owner: Address)
        -> u128;
    fn redeem(e: Env, caller: Address, shares: u128, receiver: Address, owner: Address) -> u128;
    fn redeem_with_max_loss(
        e: Env,
        caller: Address,
        shares: u128,
        receiver: Address,
        owner: Address,
        max_loss: u32,
    ) -> u128;

    // Harvest
    fn harvest(e: Env, caller: Address, max_deposited_amount: u128) -> u128;
    fn harvest_to(
        e: Env,
        caller: Address,
        max_deposited_amount: u128,
        to_lowest_yield: bool,
    ) -> u128;
    fn max_deposited_amount(e: Env) -> u128;

    // Share token
    fn name(e: Env) -> String;
    fn symbol(e: Env) -> String;
    fn decimals(e: Env) -> u32;
    fn balance(e: Env, id: Address) -> u128;
    fn total_supply(e: Env) -> u128;
    fn transfer(e: Env, from: Address, to: Address, amount: u128);
    fn approve(e: Env, from: Address, spender: Address, amount: u128);
    fn allowance(e: Env, from: Address, spender: Address) -> u128;
}

#[contract]
pub struct SavingsVaultContract;

#[contractimpl]
impl SavingsVaultContractTrait for SavingsVaultContract {
    fn initialize(
        e: Env,
        admin: Address,
        name: String,
        symbol: String,
        asset: Address,
        currency_id: u32,
        wrapped_fcash_factory: Address,
        notional_router: Address,
        max_loss: u32,
        fee_recipient: Address,
    ) {
        can_init_contract(&e);
        validate_max_loss(&e, max_loss);

        let markets: Vec<MarketParameters> =
            NotionalRouterClient::new(&e, &notional_router).get_active_markets(&currency_id);

        if markets.len() < 2 {
            panic_with_error!(&e, &VaultErrors::NotEnoughMarkets);
        }

        let factory = WrappedFCashFactoryClient::new(&e, &wrapped_fcash_factory);
        let mut fcash_positions: Vec<Address> = Vec::new(&e);
        for market in markets.iter().take(2) {
            fcash_positions.push_back(factory.deploy_wrapper(&currency_id, &market.maturity));
        }

        e._core().set_state(&CoreState {
            asset,
            currency_id,
            wrapped_fcash_factory,
            notional_router,
            max_loss,
            fee_recipient,
            aum_fee: 0,
            name,
            symbol,
            fcash_positions,
        });
        e._core().set_last_fee_accrual(&e.ledger().timestamp());

        e._roles().grant(&Role::Admin, &admin);
        events::role_grant(&e, &Role::Admin, &admin);
        e._core().bump();
    }

    fn upgrade(e: Env, caller: Address, hash: BytesN<32>) {
        validate(&e, &caller, Role::Admin);
        e.deployer().update_current_contract_wasm(hash);
        e._core().bump();
    }

    fn get_core_state(e: Env) -> CoreState {
        e._core().bump();
        get_core_state(&e)
    }

    fn grant_role(e: Env, caller: Address, role: Role, account: Address) {
        validate(&e, &caller, Role::Admin);
        e._roles().grant(&role, &account);
        events::role_grant(&e, &role, &account);
        e._core().bump();
    }

    fn revoke_role(e: Env, caller: Address, role: Role, account: Address) {
        validate(&e, &caller, Role::Admin);
        e._roles().revoke(&role, &account);
        events::role_revoke(&e, &role, &account);
        e._core().bump();
    }

    fn has_role(e: Env, role: Role, account: Address) -> bool {
        e._roles().has(&role, &account)
    }

    fn set_max_loss(e: Env, caller: Address, max_loss: u32) {
        validate(&e, &caller, Role::VaultManager);
        validate_max_loss(&e, max_loss);

        let mut core_state: CoreState = get_core_state(&e);
        core_state.max_loss = max_loss;
        e._core().set_state(&core_state);

        events::max_loss(&e, max_loss);
        e._core().bump();
    }

    fn set_slippage(e: Env, caller: Address, slippage: u32) {
        validate(&e, &caller, Role::VaultManager);

        if (slippage as u128) >= BP {
            panic_with_error!(&e, &VaultErrors::InvalidMaxLoss);
        }

        let max_loss: u32 = (BP as u32) - slippage;
        let mut core_state: CoreState = get_core_state(&e);
        core_state.max_loss = max_loss;
        e._core().set_state(&core_state);

        events::max_loss(&e, max_loss);
        e._core().bump();
    }

    fn set_fee_recipient(e: Env, caller: Address, fee_recipient: Address) {
        validate(&e, &caller, Role::Admin);

        // Fees earned so far belong to the previous recipient
        let mut core_state: CoreState = get_core_state(&e);
        accrue_fees(&e, &core_state);

        core_state.fee_recipient = fee_recipient.clone();
        e._core().set_state(&core_state);

        events::fee_recipient(&e, &fee_recipient);
        e._core().bump();
    }

    fn set_aum_fee(e: Env, caller: Address, aum_fee: u32) {
        validate(&e, &caller, Role::VaultManager);
        validate_aum_fee(&e, aum_fee);

        let mut core_state: CoreState = get_core_state(&e);
        accrue_fees(&e, &core_state);

        core_state.aum_fee = aum_fee;
        e._core().set_state(&core_state);

        events::aum_fee(&e, aum_fee);
        e._core().bump();
    }

    fn asset(e: Env) -> Address {
        get_core_state(&e).asset
    }

    fn max_loss(e: Env) -> u32 {
        get_core_state(&e).max_loss
    }

    fn slippage(e: Env) -> u32 {
        slippage_from_max_loss(get_core_state(&e).max_loss)
    }

    fn fee_recipient(e: Env) -> Address {
        get_core_state(&e).fee_recipient
    }

    fn aum_fee(e: Env) -> u32 {
        get_core_state(&e).aum_fee
    }

    fn get_fcash_positions(e: Env) -> Vec<Address> {
        get_core_state(&e).fcash_positions
    }

    fn sort_markets_by_oracle_rate(e: Env) -> SortedMarkets {
        markets::sort_markets_by_oracle_rate(&e, &get_core_state(&e))
    }

    fn total_assets(e: Env) -> u128 {
        valuation::total_assets(&e, &get_core_state(&e))
    }

    fn spot_assets(e: Env) -> u128 {
        valuation::spot_assets(&e, &get_core_state(&e))
    }

    fn get_apy(e: Env) -> u128 {
        valuation::get_apy(&e, &get_core_state(&e))
    }

    fn convert_to_shares(e: Env, assets: u128) -> u128 {
        valuation::convert_to_shares(&e, &get_core_state(&e), assets)
    }

    fn convert_to_assets(e: Env, shares: u128) -> u128 {
        valuation::convert_to_assets(&e, &get_core_state(&e), shares)
    }

    fn max_deposit(_e: Env, _receiver: Address) -> u128 {
        u128::MAX
    }

    fn max_mint(_e: Env, _receiver: Address) -> u128 {
        u128::MAX
    }

    fn max_withdraw(e: Env, owner: Address) -> u128 {
        valuation::max_withdraw(&e, &get_core_state(&e), &owner)
    }

    fn max_redeem(e: Env, owner: Address) -> u128 {
        e._shares().balance(&owner)
    }

    fn preview_deposit(e: Env, assets: u128) -> u128 {
        valuation::preview_deposit(&e, &get_core_state(&e), assets)
    }

    fn preview_mint(e: Env, shares: u128) -> u128 {
        valuation::preview_mint(&e, &get_core_state(&e), shares)
    }

    fn preview_withdraw(e: Env, assets: u128) -> u128 {
        valuation::preview_withdraw(&e, &get_core_state(&e), assets)
    }

    fn preview_redeem(e: Env, shares: u128) -> u128 {
        valuation::preview_redeem(&e, &get_core_state(&e), shares)
    }

    fn deposit(e: Env, caller: Address, assets: u128, receiver: Address) -> u128 {
        caller.require_auth();

        if assets == 0 {
            panic_with_error!(&e, &VaultErrors::ZeroAmount);
        }

        let core_state: CoreState = get_core_state(&e);
        accrue_fees(&e, &core_state);

        let shares: u128 = valuation::preview_deposit(&e, &core_state, assets);
        if shares == 0 {
            panic_with_error!(&e, &VaultErrors::ZeroShares);
        }

        receive_assets(&e, &core_state, &caller, assets);
        mint_shares(&e, &receiver, shares);

        events::deposit(&e, &caller, &receiver, assets, shares);
        e._core().bump();
        shares
    }

    fn mint(e: Env, caller: Address, shares: u128, receiver: Address) -> u128 {
        caller.require_auth();

        if shares == 0 {
            panic_with_error!(&e, &VaultErrors::ZeroShares);
        }

        let core_state: CoreState = get_core_state(&e);
        accrue_fees(&e, &core_state);

        let assets: u128 = valuation::preview_mint(&e, &core_state, shares);
        if assets == 0 {
            panic_with_error!(&e, &VaultErrors::ZeroAssets);
        }

        receive_assets(&e, &core_state, &caller, assets);
        mint_shares(&e, &receiver, shares);

        events::deposit(&e, &caller, &receiver, assets, shares);
        e._core().bump();
        assets
    }

    fn withdraw(
        e: Env,
        caller: Address,
        assets: u128,
        receiver: Address,
        owner: Address,
    ) -> u128 {
        caller.require_auth();

        if assets == 0 {
            panic_with_error!(&e, &VaultErrors::ZeroAmount);
        }

        let core_state: CoreState = get_core_state(&e);
        accrue_fees(&e, &core_state);

        let shares: u128 = valuation::preview_withdraw(&e, &core_state, assets);
        process_exit(&e, &core_state, &caller, &receiver, &owner, assets, shares);
        shares
    }

    fn redeem(e: Env, caller: Address, shares: u128, receiver: Address, owner: Address) -> u128 {
        caller.require_auth();

        if shares == 0 {
            panic_with_error!(&e, &VaultErrors::ZeroShares);
        }

        let core_state: CoreState = get_core_state(&e);
        accrue_fees(&e, &core_state);

        let assets: u128 = valuation::preview_redeem(&e, &core_state, shares);
        if assets == 0 {
            panic_with_error!(&e, &VaultErrors::ZeroAssets);
        }

        process_exit(&e, &core_state, &caller, &receiver, &owner, assets, shares);
        assets
    }

    fn redeem_with_max_loss(
        e: Env,
        caller: Address,
        shares: u128,
        receiver: Address,
        owner: Address,
        max_loss: u32,
    ) -> u128 {
        caller.require_auth();
        validate_max_loss(&e, max_loss);

        if shares == 0 {
            panic_with_error!(&e, &VaultErrors::ZeroShares);
        }

        let core_state: CoreState = get_core_state(&e);
        accrue_fees(&e, &core_state);

        let assets: u128 = valuation::preview_redeem(&e, &core_state, shares);
        if assets == 0 {
            panic_with_error!(&e, &VaultErrors::ZeroAssets);
        }

        let oracle_assets: u128 = to_assets(
            shares,
            e._shares().total_supply(),
            valuation::total_assets(&e, &core_state),
            Rounding::Down,
        );

        if !within_max_loss(assets, oracle_assets, max_loss) {
            panic_with_error!(&e, &VaultErrors::PriceImpact);
        }

        process_exit(&e, &core_state, &caller, &receiver, &owner, assets, shares);
        assets
    }

    fn harvest(e: Env, caller: Address, max_deposited_amount: u128) -> u128 {
        validate(&e, &caller, Role::Harvester);
        accrue_fees(&e, &get_core_state(&e));

        let fcash: u128 = harvest::harvest(&e, max_deposited_amount, false);
        e._core().bump();
        fcash
    }

    fn harvest_to(
        e: Env,
        caller: Address,
        max_deposited_amount: u128,
        to_lowest_yield: bool,
    ) -> u128 {
        validate(&e, &caller, Role::Harvester);
        accrue_fees(&e, &get_core_state(&e));

        let fcash: u128 = harvest::harvest(&e, max_deposited_amount, to_lowest_yield);
        e._core().bump();
        fcash
    }

    fn max_deposited_amount(e: Env) -> u128 {
        harvest::max_deposited_amount(&e, &get_core_state(&e))
    }

    fn name(e: Env) -> String {
        get_core_state(&e).name
    }

    fn symbol(e: Env) -> String {
        get_core_state(&e).symbol
    }

    fn decimals(e: Env) -> u32 {
        token::Client::new(&e, &get_core_state(&e).asset).decimals()
    }

    fn balance(e: Env, id: Address) -> u128 {
        e._shares().balance(&id)
    }

    fn total_supply(e: Env) -> u128 {
        e._shares().total_supply()
    }

    fn transfer(e: Env, from: Address, to: Address, amount: u128) {
        from.require_auth();
        transfer_shares(&e, &from, &to, amount);
        e._core().bump();
    }

    fn approve(e: Env, from: Address, spender: Address, amount: u128) {
        from.require_auth();
        e._shares().set_allowance(&from, &spender, &amount);
        e._core().bump();
    }

    fn allowance(e: Env, from: Address, spender: Address) -> u128 {
        e._shares().allowance(&from, &spender)
    }
}

fn process_exit(
    e: &Env,
    core_state: &CoreState,
    caller: &Address,
    receiver: &Address,
    owner: &Address,
    assets: u128,
    shares: u128,
) {
    if caller != owner {
        spend_allowance(e, owner, caller, shares);
    }

    burn_shares(e, owner, shares);
    free_liquidity(e, core_state, assets);
    send_assets(e, core_state, receiver, assets);

    events::withdraw(e, caller, receiver, owner, assets, shares);
    e._core().bump();
}
