use crate::types::Role;
use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Config
    RequiredVoteCount,
    WithdrawalDelaySeconds,
    SignatureManager,
    NativeToken,
    /// Roles
    Role(Role, Address),
    /// Withdrawal requests
    NextWithdrawalRequestId,
    WithdrawalRequest(u64),
    OpenWithdrawalRequestIds,
    OpenWithdrawalRequestIndex(u64),
}
