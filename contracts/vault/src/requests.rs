use crate::error::ContractError;
use crate::open_set;
use crate::storage_types::DataKey;
use crate::types::WithdrawalRequest;
use soroban_sdk::Env;
use soroban_vault_std::ensure;
use soroban_vault_std::ttl::extend_persistent_ttl;

/// Allocates the next withdrawal request id. Ids are never reused.
pub fn next_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::NextWithdrawalRequestId)
        .unwrap_or(0);

    env.storage()
        .instance()
        .set(&DataKey::NextWithdrawalRequestId, &(id + 1));

    id
}

pub fn load(env: &Env, id: u64) -> Option<WithdrawalRequest> {
    env.storage()
        .persistent()
        .get(&DataKey::WithdrawalRequest(id))
}

/// Loads a request that can still be voted on, processed or deleted.
pub fn load_open(env: &Env, id: u64) -> Result<WithdrawalRequest, ContractError> {
    ensure!(open_set::contains(env, id), ContractError::NotFound);

    load(env, id).ok_or(ContractError::NotFound)
}

pub fn save(env: &Env, id: u64, request: &WithdrawalRequest) {
    let key = DataKey::WithdrawalRequest(id);

    env.storage().persistent().set(&key, request);
    extend_persistent_ttl(env, &key);
}
