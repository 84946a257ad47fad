use soroban_sdk::{contracttype, Address, Vec};

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    /// Manages voters, configuration and the lifecycle of open requests.
    Admin,
    /// Creates, votes on and processes withdrawal requests.
    Voter,
}

/// The asset a withdrawal request releases.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WithdrawalAsset {
    /// The ledger's native asset, held through the native asset contract configured on the vault.
    NativeCurrency,
    /// A balance of the given token contract.
    FungibleToken(Address),
    /// A single unit, identified by its token id, of the given non-fungible token contract.
    NonFungibleToken(Address, u128),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalRequest {
    pub asset: WithdrawalAsset,
    pub creator: Address,
    pub recipient: Address,
    pub amount: i128,
    pub created_at: u64,
    /// Anchor of the timelock. Moves with every approving vote and can be shifted by an admin.
    pub latest_approve_vote_time: u64,
    pub approve_vote_count: u32,
    /// Every voter that has voted on this request, approving or not.
    pub voted_voters: Vec<Address>,
}
