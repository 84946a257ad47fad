//! Ids of withdrawal requests that are neither processed nor deleted.
//!
//! The ids live in a single vector next to an id -> position index, so membership checks and removals
//! don't scan the vector. Removal moves the last id into the freed slot, hence the order of the ids is
//! only the creation order until the first removal.

use crate::storage_types::DataKey;
use soroban_sdk::{Env, Vec};

pub fn ids(env: &Env) -> Vec<u64> {
    env.storage()
        .instance()
        .get(&DataKey::OpenWithdrawalRequestIds)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn contains(env: &Env, id: u64) -> bool {
    env.storage()
        .instance()
        .has(&DataKey::OpenWithdrawalRequestIndex(id))
}

pub fn insert(env: &Env, id: u64) {
    if contains(env, id) {
        return;
    }

    let mut ids = ids(env);
    ids.push_back(id);

    env.storage()
        .instance()
        .set(&DataKey::OpenWithdrawalRequestIndex(id), &(ids.len() - 1));
    env.storage()
        .instance()
        .set(&DataKey::OpenWithdrawalRequestIds, &ids);
}

/// Returns false if the id was not open.
pub fn remove(env: &Env, id: u64) -> bool {
    let index_key = DataKey::OpenWithdrawalRequestIndex(id);

    let Some(index) = env.storage().instance().get::<_, u32>(&index_key) else {
        return false;
    };

    let mut ids = ids(env);
    let Some(last) = ids.pop_back() else {
        return false;
    };

    if last != id {
        ids.set(index, last);
        env.storage()
            .instance()
            .set(&DataKey::OpenWithdrawalRequestIndex(last), &index);
    }

    env.storage().instance().remove(&index_key);
    env.storage()
        .instance()
        .set(&DataKey::OpenWithdrawalRequestIds, &ids);

    true
}
