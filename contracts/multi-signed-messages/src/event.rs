use soroban_sdk::{Address, BytesN, Env, Symbol};

pub(crate) fn message_approved(
    env: &Env,
    scope: Address,
    digest: BytesN<32>,
    signer: Address,
    approval_count: u32,
) {
    let topics = (Symbol::new(env, "message_approved"), scope, digest);
    env.events().publish(topics, (signer, approval_count));
}
