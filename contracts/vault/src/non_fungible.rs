use soroban_sdk::{contractclient, Address, Env};

/// The part of a non-fungible token contract the vault relies on to release a unit it holds.
#[contractclient(name = "NonFungibleTokenClient")]
pub trait NonFungibleTokenInterface {
    /// Transfers the unit `token_id` from `from` to `to`. `from` must authorize and own the unit.
    fn transfer(env: Env, from: Address, to: Address, token_id: u128);
}
