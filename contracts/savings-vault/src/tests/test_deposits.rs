#![cfg(test)]

use crate::errors::VaultErrors;
use crate::storage::shares::SharesStorageFunc;
use crate::tests::test_utils::{
    create_test_data, idle_balance, init_contract, prepare_depositor, TestData,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

#[test]
pub fn test_first_deposit() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let deposit_amount: u128 = 1_000_0000000;
    let depositor: Address = prepare_depositor(&e, &test_data, deposit_amount);

    let zero_amount_error = test_data
        .contract_client
        .mock_all_auths()
        .try_deposit(&depositor, &0, &depositor)
        .unwrap_err()
        .unwrap();
    assert_eq!(&zero_amount_error, &VaultErrors::ZeroAmount.into());

    assert!(test_data
        .contract_client
        .try_deposit(&depositor, &deposit_amount, &depositor)
        .is_err());

    let preview: u128 = test_data.contract_client.preview_deposit(&deposit_amount);
    assert_eq!(preview, deposit_amount);

    let shares: u128 = test_data
        .contract_client
        .mock_all_auths()
        .deposit(&depositor, &deposit_amount, &depositor);

    assert_eq!(shares, preview);
    assert_eq!(test_data.contract_client.balance(&depositor), shares);
    assert_eq!(test_data.contract_client.total_supply(), shares);
    assert_eq!(test_data.contract_client.total_assets(), deposit_amount);
    assert_eq!(idle_balance(&test_data), deposit_amount);
    assert_eq!(test_data.asset_client.balance(&depositor), 0);

    e.as_contract(&test_data.contract_client.address, || {
        assert_eq!(e._shares().balance(&depositor), deposit_amount);
        assert_eq!(e._shares().total_supply(), deposit_amount);
    });
}

#[test]
pub fn test_deposit_after_harvest() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let deposit_amount: u128 = 1_000_0000000;
    let depositor_1: Address = prepare_depositor(&e, &test_data, deposit_amount);
    let depositor_2: Address = prepare_depositor(&e, &test_data, deposit_amount);

    test_data
        .contract_client
        .mock_all_auths()
        .deposit(&depositor_1, &deposit_amount, &depositor_1);

    test_data
        .contract_client
        .mock_all_auths()
        .harvest(&test_data.harvester, &u128::MAX);

    // Lending at the oracle price loses a few units to rounding, so new shares are cheaper
    let total_assets: u128 = test_data.contract_client.total_assets();
    assert!(total_assets <= deposit_amount);

    let preview: u128 = test_data.contract_client.preview_deposit(&deposit_amount);
    let shares: u128 = test_data
        .contract_client
        .mock_all_auths()
        .deposit(&depositor_2, &deposit_amount, &depositor_2);

    assert_eq!(shares, preview);
    assert!(shares >= deposit_amount);
    assert_eq!(
        shares,
        (deposit_amount * deposit_amount) / total_assets
    );
    assert_eq!(
        test_data.contract_client.total_supply(),
        deposit_amount + shares
    );
}

#[test]
pub fn test_deposit_for_another_receiver() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let deposit_amount: u128 = 250_0000000;
    let depositor: Address = prepare_depositor(&e, &test_data, deposit_amount);
    let receiver: Address = Address::generate(&e);

    test_data
        .contract_client
        .mock_all_auths()
        .deposit(&depositor, &deposit_amount, &receiver);

    assert_eq!(test_data.contract_client.balance(&depositor), 0);
    assert_eq!(test_data.contract_client.balance(&receiver), deposit_amount);
    assert_eq!(test_data.asset_client.balance(&depositor), 0);
}

#[test]
pub fn test_mint() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let deposit_amount: u128 = 1_000_0000000;
    let depositor_1: Address = prepare_depositor(&e, &test_data, deposit_amount);
    let depositor_2: Address = prepare_depositor(&e, &test_data, deposit_amount);

    let zero_shares_error = test_data
        .contract_client
        .mock_all_auths()
        .try_mint(&depositor_1, &0, &depositor_1)
        .unwrap_err()
        .unwrap();
    assert_eq!(&zero_shares_error, &VaultErrors::ZeroShares.into());

    let assets: u128 = test_data
        .contract_client
        .mock_all_auths()
        .mint(&depositor_1, &deposit_amount, &depositor_1);
    assert_eq!(assets, deposit_amount);

    test_data
        .contract_client
        .mock_all_auths()
        .harvest(&test_data.harvester, &u128::MAX);

    let shares: u128 = 500_0000000;
    let preview: u128 = test_data.contract_client.preview_mint(&shares);
    let assets: u128 = test_data
        .contract_client
        .mock_all_auths()
        .mint(&depositor_2, &shares, &depositor_2);

    assert_eq!(assets, preview);
    assert!(assets <= shares);
    assert_eq!(test_data.contract_client.balance(&depositor_2), shares);
    assert_eq!(
        test_data.asset_client.balance(&depositor_2) as u128,
        deposit_amount - assets
    );
}

#[test]
pub fn test_share_transfers_and_allowances() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let deposit_amount: u128 = 100_0000000;
    let depositor: Address = prepare_depositor(&e, &test_data, deposit_amount);
    let friend: Address = Address::generate(&e);

    test_data
        .contract_client
        .mock_all_auths()
        .deposit(&depositor, &deposit_amount, &depositor);

    let insufficient_shares_error = test_data
        .contract_client
        .mock_all_auths()
        .try_transfer(&depositor, &friend, &(deposit_amount + 1))
        .unwrap_err()
        .unwrap();
    assert_eq!(
        &insufficient_shares_error,
        &VaultErrors::InsufficientShares.into()
    );

    test_data
        .contract_client
        .mock_all_auths()
        .transfer(&depositor, &friend, &40_0000000);

    assert_eq!(test_data.contract_client.balance(&depositor), 60_0000000);
    assert_eq!(test_data.contract_client.balance(&friend), 40_0000000);
    assert_eq!(test_data.contract_client.total_supply(), deposit_amount);

    assert_eq!(test_data.contract_client.allowance(&depositor, &friend), 0);
    test_data
        .contract_client
        .mock_all_auths()
        .approve(&depositor, &friend, &10_0000000);
    assert_eq!(
        test_data.contract_client.allowance(&depositor, &friend),
        10_0000000
    );

    test_data
        .contract_client
        .mock_all_auths()
        .approve(&depositor, &friend, &0);
    assert_eq!(test_data.contract_client.allowance(&depositor, &friend), 0);
}
