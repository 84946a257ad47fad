#![cfg(test)]
extern crate std;

mod utils;

use soroban_sdk::{testutils::Address as _, vec, Address, Env, Symbol};
use soroban_vault_std::{
    assert_auth_err, assert_contract_err, assert_last_emitted_event,
    testutils::assert_invocation,
};
use utils::{balance, fund_native, setup_env, TestConfig, HALF_NATIVE_UNIT};
use vault::error::ContractError;
use vault::types::Role;
use vault::{Vault, VaultClient};

#[test]
fn register_vault() {
    let env = Env::default();

    let admin = Address::generate(&env);
    let signature_manager = Address::generate(&env);
    let native_token = Address::generate(&env);
    let contract_id = env.register(
        Vault,
        (&admin, &signature_manager, &native_token, 2_u32, 60_u64),
    );
    let client = VaultClient::new(&env, &contract_id);

    assert!(client.has_role(&Role::Admin, &admin));
    assert!(!client.has_role(&Role::Voter, &admin));
    assert_eq!(client.required_vote_count(), 2);
    assert_eq!(client.withdrawal_delay_seconds(), 60);
    assert_eq!(client.signature_manager(), signature_manager);
    assert_eq!(client.native_token(), native_token);
    assert_eq!(client.open_withdrawal_request_ids(), vec![&env]);
}

#[test]
fn grant_role() {
    let TestConfig {
        env, admin, client, ..
    } = setup_env();
    let account = Address::generate(&env);

    client.grant_role(&admin, &Role::Admin, &account);

    assert_invocation(
        &env,
        &admin,
        &client.address,
        "grant_role",
        (admin.clone(), Role::Admin, account.clone()),
    );

    assert_last_emitted_event(
        &env,
        &client.address,
        (Symbol::new(&env, "role_granted"), Role::Admin, account.clone()),
        (),
    );

    assert!(client.has_role(&Role::Admin, &account));
    assert!(!client.has_role(&Role::Voter, &account));
}

#[test]
fn add_and_remove_voter() {
    let TestConfig {
        env, admin, client, ..
    } = setup_env();
    let account = Address::generate(&env);

    client.add_voter(&admin, &account);
    assert!(client.has_role(&Role::Voter, &account));

    client.remove_voter(&admin, &account);

    assert_last_emitted_event(
        &env,
        &client.address,
        (Symbol::new(&env, "role_revoked"), Role::Voter, account.clone()),
        (),
    );

    assert!(!client.has_role(&Role::Voter, &account));
}

#[test]
fn revoke_missing_role_is_a_no_op() {
    let TestConfig {
        env, admin, client, ..
    } = setup_env();
    let account = Address::generate(&env);

    client.revoke_role(&admin, &Role::Voter, &account);

    assert!(!client.has_role(&Role::Voter, &account));
}

#[test]
fn fail_grant_role_unauthorized() {
    let TestConfig {
        env, voter, client, ..
    } = setup_env();
    let account = Address::generate(&env);

    assert_contract_err!(
        client.try_grant_role(&voter, &Role::Admin, &account),
        ContractError::Unauthorized
    );
    assert_contract_err!(
        client.try_add_voter(&voter, &account),
        ContractError::Unauthorized
    );
    assert!(!client.has_role(&Role::Voter, &account));
}

#[test]
fn fail_revoke_role_unauthorized() {
    let TestConfig {
        env,
        voter,
        client,
        ..
    } = setup_env();
    let other = Address::generate(&env);

    assert_contract_err!(
        client.try_revoke_role(&other, &Role::Voter, &voter),
        ContractError::Unauthorized
    );
    assert!(client.has_role(&Role::Voter, &voter));
}

#[test]
fn fail_grant_role_without_auth() {
    let env = Env::default();

    let admin = Address::generate(&env);
    let contract_id = env.register(
        Vault,
        (
            &admin,
            &Address::generate(&env),
            &Address::generate(&env),
            1_u32,
            0_u64,
        ),
    );
    let client = VaultClient::new(&env, &contract_id);
    let account = Address::generate(&env);

    assert_auth_err!(client.try_add_voter(&admin, &account));
    assert!(!client.has_role(&Role::Voter, &account));
}

#[test]
fn admin_can_revoke_own_role() {
    let TestConfig {
        env, admin, client, ..
    } = setup_env();
    let account = Address::generate(&env);

    client.revoke_role(&admin, &Role::Admin, &admin);

    assert!(!client.has_role(&Role::Admin, &admin));
    assert_contract_err!(
        client.try_add_voter(&admin, &account),
        ContractError::Unauthorized
    );
}

#[test]
fn update_required_vote_count() {
    let TestConfig {
        env, admin, client, ..
    } = setup_env();

    client.update_required_vote_count(&admin, &3);

    assert_invocation(
        &env,
        &admin,
        &client.address,
        "update_required_vote_count",
        (admin.clone(), 3_u32),
    );

    assert_last_emitted_event(
        &env,
        &client.address,
        (Symbol::new(&env, "required_vote_count_updated"),),
        (3_u32,),
    );

    assert_eq!(client.required_vote_count(), 3);
}

#[test]
fn update_withdrawal_delay_seconds() {
    let TestConfig {
        env, admin, client, ..
    } = setup_env();

    client.update_withdrawal_delay_seconds(&admin, &86_400);

    assert_last_emitted_event(
        &env,
        &client.address,
        (Symbol::new(&env, "withdrawal_delay_updated"),),
        (86_400_u64,),
    );

    assert_eq!(client.withdrawal_delay_seconds(), 86_400);
}

#[test]
fn update_signature_manager() {
    let TestConfig {
        env, admin, client, ..
    } = setup_env();
    let signature_manager = Address::generate(&env);

    client.update_signature_manager(&admin, &signature_manager);

    assert_last_emitted_event(
        &env,
        &client.address,
        (Symbol::new(&env, "signature_manager_updated"),),
        (signature_manager.clone(),),
    );

    assert_eq!(client.signature_manager(), signature_manager);
}

#[test]
fn fail_update_config_unauthorized() {
    let TestConfig {
        env,
        voter,
        client,
        ..
    } = setup_env();

    assert_contract_err!(
        client.try_update_required_vote_count(&voter, &5),
        ContractError::Unauthorized
    );
    assert_contract_err!(
        client.try_update_withdrawal_delay_seconds(&voter, &0),
        ContractError::Unauthorized
    );
    assert_contract_err!(
        client.try_update_signature_manager(&voter, &Address::generate(&env)),
        ContractError::Unauthorized
    );

    assert_eq!(client.required_vote_count(), utils::REQUIRED_VOTE_COUNT);
    assert_eq!(
        client.withdrawal_delay_seconds(),
        utils::WITHDRAWAL_DELAY_SECONDS
    );
}

#[test]
fn receive_native_currency() {
    let config = setup_env();

    fund_native(&config, HALF_NATIVE_UNIT);

    assert_eq!(config.client.native_balance(), HALF_NATIVE_UNIT);
    assert_eq!(
        balance(&config.env, &config.native_token, &config.client.address),
        HALF_NATIVE_UNIT
    );
}

#[test]
fn receive_native_currency_emits_event() {
    let TestConfig {
        env,
        native_token,
        client,
        ..
    } = setup_env();
    let depositor = Address::generate(&env);

    soroban_sdk::token::StellarAssetClient::new(&env, &native_token).mint(&depositor, &100);
    client.receive_native_currency(&depositor, &100);

    assert_last_emitted_event(
        &env,
        &client.address,
        (Symbol::new(&env, "native_received"), depositor.clone()),
        (100_i128,),
    );

    assert_eq!(balance(&env, &native_token, &depositor), 0);
}

#[test]
fn fail_receive_native_currency_invalid_amount() {
    let TestConfig { env, client, .. } = setup_env();
    let depositor = Address::generate(&env);

    assert_contract_err!(
        client.try_receive_native_currency(&depositor, &0),
        ContractError::InvalidAmount
    );
    assert_contract_err!(
        client.try_receive_native_currency(&depositor, &-1),
        ContractError::InvalidAmount
    );
}

#[test]
fn token_balance() {
    let config = setup_env();

    let token = utils::fund_token(&config, 1_000);

    assert_eq!(config.client.token_balance(&token), 1_000);
    assert_eq!(config.client.native_balance(), 0);
}
