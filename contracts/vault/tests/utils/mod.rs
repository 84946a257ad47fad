#![allow(dead_code)]

use multi_signed_messages::MultiSignedMessages;
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};
use vault::{Vault, VaultClient};

pub const REQUIRED_VOTE_COUNT: u32 = 1;
pub const WITHDRAWAL_DELAY_SECONDS: u64 = 5;

/// Half a unit of the native asset, in stroops.
pub const HALF_NATIVE_UNIT: i128 = 5_000_000;

pub struct TestConfig<'a> {
    pub env: Env,
    pub admin: Address,
    pub voter: Address,
    pub native_token: Address,
    pub signature_manager: Address,
    pub client: VaultClient<'a>,
}

pub fn setup_env<'a>() -> TestConfig<'a> {
    setup_env_with(REQUIRED_VOTE_COUNT, WITHDRAWAL_DELAY_SECONDS)
}

pub fn setup_env_with<'a>(
    required_vote_count: u32,
    withdrawal_delay_seconds: u64,
) -> TestConfig<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let voter = Address::generate(&env);
    let native_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let signature_manager = env.register(MultiSignedMessages, ());

    let contract_id = env.register(
        Vault,
        (
            &admin,
            &signature_manager,
            &native_token,
            required_vote_count,
            withdrawal_delay_seconds,
        ),
    );
    let client = VaultClient::new(&env, &contract_id);

    client.add_voter(&admin, &voter);

    TestConfig {
        env,
        admin,
        voter,
        native_token,
        signature_manager,
        client,
    }
}

/// Mints `amount` of the native asset to a fresh depositor and deposits it into the vault.
pub fn fund_native(config: &TestConfig, amount: i128) {
    let depositor = Address::generate(&config.env);

    StellarAssetClient::new(&config.env, &config.native_token).mint(&depositor, &amount);
    config.client.receive_native_currency(&depositor, &amount);
}

/// Registers a new token and mints `amount` of it straight to the vault.
pub fn fund_token(config: &TestConfig, amount: i128) -> Address {
    let token = config
        .env
        .register_stellar_asset_contract_v2(Address::generate(&config.env))
        .address();

    StellarAssetClient::new(&config.env, &token).mint(&config.client.address, &amount);

    token
}

pub fn balance(env: &Env, token: &Address, account: &Address) -> i128 {
    TokenClient::new(env, token).balance(account)
}

#[contracttype]
enum NftDataKey {
    Owner(u128),
}

/// Minimal non-fungible token tracking a single owner per token id.
#[contract]
pub struct MockNonFungibleToken;

#[contractimpl]
impl MockNonFungibleToken {
    pub fn mint(env: Env, to: Address, token_id: u128) {
        env.storage()
            .persistent()
            .set(&NftDataKey::Owner(token_id), &to);
    }

    pub fn owner_of(env: Env, token_id: u128) -> Option<Address> {
        env.storage().persistent().get(&NftDataKey::Owner(token_id))
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u128) {
        from.require_auth();

        let owner: Option<Address> = env.storage().persistent().get(&NftDataKey::Owner(token_id));
        assert_eq!(owner, Some(from), "sender does not own the token");

        env.storage()
            .persistent()
            .set(&NftDataKey::Owner(token_id), &to);
    }
}
