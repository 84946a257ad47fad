use crate::error::ContractError;
use crate::storage_types::DataKey;
use crate::types::Role;
use soroban_sdk::{Address, Env};
use soroban_vault_std::traits::ThenOk;

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .instance()
        .has(&DataKey::Role(role, account.clone()))
}

pub fn require_role(env: &Env, role: Role, account: &Address) -> Result<(), ContractError> {
    has_role(env, role, account).then_ok((), ContractError::Unauthorized)
}

/// Returns false if the account already held the role.
pub fn grant_role(env: &Env, role: Role, account: &Address) -> bool {
    if has_role(env, role, account) {
        return false;
    }

    env.storage()
        .instance()
        .set(&DataKey::Role(role, account.clone()), &());

    true
}

/// Returns false if the account did not hold the role.
pub fn revoke_role(env: &Env, role: Role, account: &Address) -> bool {
    if !has_role(env, role, account) {
        return false;
    }

    env.storage()
        .instance()
        .remove(&DataKey::Role(role, account.clone()));

    true
}
