use crate::error::ContractError;
use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env, Vec};

/// Tally of distinct approvals over arbitrary messages.
///
/// Approvals are grouped by `scope`, the address of the contract that requested them, so the same raw
/// message approved for two vaults yields two independent tallies. The registry has no notion of a
/// threshold; deciding how many approvals are enough is up to the scope.
#[contractclient(name = "MultiSignedMessagesClient")]
pub trait MultiSignedMessagesInterface {
    /// Returns the digest binding `message` to `scope`.
    fn digest_for(env: &Env, scope: Address, message: Bytes) -> BytesN<32>;

    /// Recovers the 20-byte Ethereum-style address that produced `signature` over `digest`.
    ///
    /// The signature is expected in `r || s || v` form over the personal-message hash of the digest, i.e.
    /// `keccak256("\x19Ethereum Signed Message:\n32" || digest)`. `v` may be given as `0/1` or `27/28`.
    /// `r` must lie in `[1, n)` and `s` in `[1, n/2]`, with `n` the secp256k1 group order.
    fn recover_signer(
        env: &Env,
        digest: BytesN<32>,
        signature: BytesN<65>,
    ) -> Result<BytesN<20>, ContractError>;

    /// Returns the hash a signer actually signs for `digest`, i.e. its personal-message hash.
    fn signed_message_hash(env: &Env, digest: BytesN<32>) -> BytesN<32>;

    /// Records `signer` as having approved `message` within `scope`.
    ///
    /// Only callable by `scope` itself. Registering the same signer twice is a no-op.
    /// Returns the number of distinct approvals after the call.
    fn register_approval(env: &Env, scope: Address, signer: Address, message: Bytes) -> u32;

    /// Returns the number of distinct approvals of `message` within `scope`.
    fn approval_count(env: &Env, scope: Address, message: Bytes) -> u32;

    /// Returns the approvers of `message` within `scope`, in approval order.
    fn approvals(env: &Env, scope: Address, message: Bytes) -> Vec<Address>;

    /// Returns true if `signer` has approved `message` within `scope`.
    fn has_approved(env: &Env, scope: Address, message: Bytes, signer: Address) -> bool;
}
