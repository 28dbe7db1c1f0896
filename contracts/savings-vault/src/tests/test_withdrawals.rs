#![cfg(test)]

use crate::errors::VaultErrors;
use crate::tests::test_utils::{
    create_test_data, fcash_balance, idle_balance, init_contract, prepare_depositor, TestData,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

#[test]
pub fn test_withdraw_idle_assets() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let deposit_amount: u128 = 1_000_0000000;
    let depositor: Address = prepare_depositor(&e, &test_data, deposit_amount);
    let receiver: Address = Address::generate(&e);
    test_data
        .contract_client
        .mock_all_auths()
        .deposit(&depositor, &deposit_amount, &depositor);

    let zero_amount_error = test_data
        .contract_client
        .mock_all_auths()
        .try_withdraw(&depositor, &0, &receiver, &depositor)
        .unwrap_err()
        .unwrap();
    assert_eq!(&zero_amount_error, &VaultErrors::ZeroAmount.into());

    let shares: u128 = test_data.contract_client.mock_all_auths().withdraw(
        &depositor,
        &400_0000000,
        &receiver,
        &depositor,
    );

    assert_eq!(shares, 400_0000000);
    assert_eq!(test_data.asset_client.balance(&receiver), 400_0000000);
    assert_eq!(test_data.contract_client.balance(&depositor), 600_0000000);
    assert_eq!(test_data.contract_client.total_supply(), 600_0000000);
    assert_eq!(idle_balance(&test_data), 600_0000000);
}

#[test]
pub fn test_redeem_after_harvest() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let deposit_amount: u128 = 1_000_0000000;
    let depositor: Address = prepare_depositor(&e, &test_data, deposit_amount);
    let shares: u128 = test_data
        .contract_client
        .mock_all_auths()
        .deposit(&depositor, &deposit_amount, &depositor);
    test_data
        .contract_client
        .mock_all_auths()
        .harvest(&test_data.harvester, &u128::MAX);

    let preview: u128 = test_data.contract_client.preview_redeem(&shares);
    let assets: u128 = test_data.contract_client.mock_all_auths().redeem(
        &depositor,
        &shares,
        &depositor,
        &depositor,
    );

    assert_eq!(assets, preview);
    assert_eq!(test_data.asset_client.balance(&depositor) as u128, assets);
    assert!(assets <= deposit_amount);
    assert!(assets >= (deposit_amount * 99) / 100);

    assert_eq!(test_data.contract_client.total_supply(), 0);
    assert_eq!(test_data.contract_client.balance(&depositor), 0);
    assert_eq!(fcash_balance(&test_data, &test_data.six_months_fcash), 0);
}

#[test]
pub fn test_partial_exits_after_harvest() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let deposit_amount: u128 = 1_000_0000000;
    let depositor: Address = prepare_depositor(&e, &test_data, deposit_amount);
    let receiver: Address = Address::generate(&e);
    test_data
        .contract_client
        .mock_all_auths()
        .deposit(&depositor, &deposit_amount, &depositor);
    test_data
        .contract_client
        .mock_all_auths()
        .harvest(&test_data.harvester, &u128::MAX);

    let fcash_before: u128 = fcash_balance(&test_data, &test_data.six_months_fcash);

    let preview: u128 = test_data.contract_client.preview_redeem(&500_0000000);
    let assets: u128 = test_data.contract_client.mock_all_auths().redeem(
        &depositor,
        &500_0000000,
        &receiver,
        &depositor,
    );

    assert_eq!(assets, preview);
    assert_eq!(test_data.asset_client.balance(&receiver) as u128, assets);
    assert_eq!(test_data.contract_client.balance(&depositor), 500_0000000);

    // Only part of the position was sold
    let fcash_after: u128 = fcash_balance(&test_data, &test_data.six_months_fcash);
    assert!(fcash_after > 0);
    assert!(fcash_after < fcash_before);

    let withdrawn: u128 = 200_0000000;
    let preview: u128 = test_data.contract_client.preview_withdraw(&withdrawn);
    let shares: u128 = test_data.contract_client.mock_all_auths().withdraw(
        &depositor,
        &withdrawn,
        &receiver,
        &depositor,
    );

    assert_eq!(shares, preview);
    assert!(shares >= withdrawn);
    assert_eq!(
        test_data.asset_client.balance(&receiver) as u128,
        assets + withdrawn
    );
    assert_eq!(
        test_data.contract_client.balance(&depositor),
        500_0000000 - shares
    );
}

#[test]
pub fn test_exits_on_behalf_of_owner() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let deposit_amount: u128 = 1_000_0000000;
    let owner: Address = prepare_depositor(&e, &test_data, deposit_amount);
    let spender: Address = Address::generate(&e);
    test_data
        .contract_client
        .mock_all_auths()
        .deposit(&owner, &deposit_amount, &owner);

    let insufficient_allowance_error = test_data
        .contract_client
        .mock_all_auths()
        .try_redeem(&spender, &100_0000000, &spender, &owner)
        .unwrap_err()
        .unwrap();
    assert_eq!(
        &insufficient_allowance_error,
        &VaultErrors::InsufficientAllowance.into()
    );

    test_data
        .contract_client
        .mock_all_auths()
        .approve(&owner, &spender, &200_0000000);

    let assets: u128 = test_data.contract_client.mock_all_auths().redeem(
        &spender,
        &100_0000000,
        &spender,
        &owner,
    );

    assert_eq!(assets, 100_0000000);
    assert_eq!(test_data.asset_client.balance(&spender), 100_0000000);
    assert_eq!(test_data.contract_client.balance(&owner), 900_0000000);
    assert_eq!(
        test_data.contract_client.allowance(&owner, &spender),
        100_0000000
    );

    let insufficient_allowance_error = test_data
        .contract_client
        .mock_all_auths()
        .try_withdraw(&spender, &150_0000000, &spender, &owner)
        .unwrap_err()
        .unwrap();
    assert_eq!(
        &insufficient_allowance_error,
        &VaultErrors::InsufficientAllowance.into()
    );
}

#[test]
pub fn test_redeem_more_than_balance() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let deposit_amount: u128 = 100_0000000;
    let depositor_1: Address = prepare_depositor(&e, &test_data, deposit_amount);
    let depositor_2: Address = prepare_depositor(&e, &test_data, deposit_amount);
    test_data
        .contract_client
        .mock_all_auths()
        .deposit(&depositor_1, &deposit_amount, &depositor_1);
    test_data
        .contract_client
        .mock_all_auths()
        .deposit(&depositor_2, &deposit_amount, &depositor_2);

    let insufficient_shares_error = test_data
        .contract_client
        .mock_all_auths()
        .try_redeem(
            &depositor_1,
            &(deposit_amount + 1),
            &depositor_1,
            &depositor_1,
        )
        .unwrap_err()
        .unwrap();
    assert_eq!(
        &insufficient_shares_error,
        &VaultErrors::InsufficientShares.into()
    );
}

#[test]
pub fn test_redeem_with_max_loss() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let deposit_amount: u128 = 1_000_0000000;
    let depositor: Address = prepare_depositor(&e, &test_data, deposit_amount);
    let shares: u128 = test_data
        .contract_client
        .mock_all_auths()
        .deposit(&depositor, &deposit_amount, &depositor);
    test_data
        .contract_client
        .mock_all_auths()
        .harvest(&test_data.harvester, &u128::MAX);

    let invalid_max_loss_error = test_data
        .contract_client
        .mock_all_auths()
        .try_redeem_with_max_loss(&depositor, &shares, &depositor, &depositor, &0)
        .unwrap_err()
        .unwrap();
    assert_eq!(&invalid_max_loss_error, &VaultErrors::InvalidMaxLoss.into());

    // Selling before maturity costs 0.5%, more than the 0.1% accepted
    let price_impact_error = test_data
        .contract_client
        .mock_all_auths()
        .try_redeem_with_max_loss(&depositor, &shares, &depositor, &depositor, &9990)
        .unwrap_err()
        .unwrap();
    assert_eq!(&price_impact_error, &VaultErrors::PriceImpact.into());
    assert_eq!(test_data.contract_client.balance(&depositor), shares);

    let preview: u128 = test_data.contract_client.preview_redeem(&shares);
    let assets: u128 = test_data
        .contract_client
        .mock_all_auths()
        .redeem_with_max_loss(&depositor, &shares, &depositor, &depositor, &9900);

    assert_eq!(assets, preview);
    assert_eq!(test_data.asset_client.balance(&depositor) as u128, assets);
}
