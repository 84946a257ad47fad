use crate::types::{Role, WithdrawalAsset};
use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn role_granted(env: &Env, role: Role, account: Address) {
    let topics = (Symbol::new(env, "role_granted"), role, account);
    env.events().publish(topics, ());
}

pub(crate) fn role_revoked(env: &Env, role: Role, account: Address) {
    let topics = (Symbol::new(env, "role_revoked"), role, account);
    env.events().publish(topics, ());
}

pub(crate) fn native_received(env: &Env, from: Address, amount: i128) {
    let topics = (Symbol::new(env, "native_received"), from);
    env.events().publish(topics, (amount,));
}

pub(crate) fn required_vote_count_updated(env: &Env, required_vote_count: u32) {
    let topics = (Symbol::new(env, "required_vote_count_updated"),);
    env.events().publish(topics, (required_vote_count,));
}

pub(crate) fn withdrawal_delay_updated(env: &Env, withdrawal_delay_seconds: u64) {
    let topics = (Symbol::new(env, "withdrawal_delay_updated"),);
    env.events().publish(topics, (withdrawal_delay_seconds,));
}

pub(crate) fn signature_manager_updated(env: &Env, signature_manager: Address) {
    let topics = (Symbol::new(env, "signature_manager_updated"),);
    env.events().publish(topics, (signature_manager,));
}

pub(crate) fn withdrawal_request_created(
    env: &Env,
    id: u64,
    creator: Address,
    recipient: Address,
    asset: WithdrawalAsset,
    amount: i128,
) {
    let topics = (Symbol::new(env, "withdrawal_request_created"), id, creator);
    env.events().publish(topics, (recipient, asset, amount));
}

pub(crate) fn withdrawal_request_voted(
    env: &Env,
    id: u64,
    voter: Address,
    approve: bool,
    approve_vote_count: u32,
) {
    let topics = (Symbol::new(env, "withdrawal_request_voted"), id, voter);
    env.events().publish(topics, (approve, approve_vote_count));
}

pub(crate) fn withdrawal_request_processed(env: &Env, id: u64, processor: Address) {
    let topics = (Symbol::new(env, "withdrawal_request_processed"), id, processor);
    env.events().publish(topics, ());
}

pub(crate) fn withdrawal_request_deleted(env: &Env, id: u64, admin: Address) {
    let topics = (Symbol::new(env, "withdrawal_request_deleted"), id, admin);
    env.events().publish(topics, ());
}

pub(crate) fn approve_vote_time_updated(env: &Env, id: u64, latest_approve_vote_time: u64) {
    let topics = (Symbol::new(env, "approve_vote_time_updated"), id);
    env.events().publish(topics, (latest_approve_vote_time,));
}
