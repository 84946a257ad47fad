use crate::error::ContractError;
use crate::event;
use crate::interface::MultiSignedMessagesInterface;
use crate::storage_types::{ApprovalKey, DataKey};
use soroban_sdk::crypto::Hash;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, Vec};
use soroban_vault_std::ensure;
use soroban_vault_std::ttl::extend_persistent_ttl;

const PERSONAL_MESSAGE_PREFIX: &[u8; 28] = b"\x19Ethereum Signed Message:\n32";

/// Order of the secp256k1 group, big-endian.
const CURVE_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// Half the group order, big-endian. Larger `s` values are the malleated twin of a valid signature.
const HALF_CURVE_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

#[contract]
pub struct MultiSignedMessages;

#[contractimpl]
impl MultiSignedMessagesInterface for MultiSignedMessages {
    fn digest_for(env: &Env, scope: Address, message: Bytes) -> BytesN<32> {
        let mut data = scope.to_xdr(env);
        data.append(&message);

        env.crypto().keccak256(&data).into()
    }

    fn recover_signer(
        env: &Env,
        digest: BytesN<32>,
        signature: BytesN<65>,
    ) -> Result<BytesN<20>, ContractError> {
        let signature = signature.to_array();

        let recovery_id = match signature[64] {
            v @ 0..=1 => v,
            v @ 27..=28 => v - 27,
            _ => return Err(ContractError::InvalidSignature),
        };

        let mut compact = [0u8; 64];
        compact.copy_from_slice(&signature[..64]);

        // scalars are big-endian, so byte-wise comparison orders them numerically
        let (r, s) = compact.split_at(32);
        ensure!(
            is_non_zero(r) && r < CURVE_ORDER.as_slice(),
            ContractError::InvalidSignature
        );
        ensure!(
            is_non_zero(s) && s <= HALF_CURVE_ORDER.as_slice(),
            ContractError::InvalidSignature
        );

        let public_key = env.crypto().secp256k1_recover(
            &personal_message_hash(env, &digest),
            &BytesN::from_array(env, &compact),
            recovery_id.into(),
        );

        Ok(address_from_public_key(env, public_key))
    }

    fn signed_message_hash(env: &Env, digest: BytesN<32>) -> BytesN<32> {
        personal_message_hash(env, &digest).into()
    }

    fn register_approval(env: &Env, scope: Address, signer: Address, message: Bytes) -> u32 {
        scope.require_auth();

        let key = ApprovalKey {
            digest: Self::digest_for(env, scope.clone(), message),
            scope,
        };

        let approvals_key = DataKey::Approvals(key.clone());
        let approved_key = DataKey::Approved(key.clone(), signer.clone());

        let mut approvals: Vec<Address> = env
            .storage()
            .persistent()
            .get(&approvals_key)
            .unwrap_or_else(|| Vec::new(env));

        if env.storage().persistent().has(&approved_key) {
            return approvals.len();
        }

        approvals.push_back(signer.clone());

        env.storage().persistent().set(&approvals_key, &approvals);
        env.storage().persistent().set(&approved_key, &());

        extend_persistent_ttl(env, &approvals_key);
        extend_persistent_ttl(env, &approved_key);

        event::message_approved(env, key.scope, key.digest, signer, approvals.len());

        approvals.len()
    }

    fn approval_count(env: &Env, scope: Address, message: Bytes) -> u32 {
        Self::approvals(env, scope, message).len()
    }

    fn approvals(env: &Env, scope: Address, message: Bytes) -> Vec<Address> {
        let key = ApprovalKey {
            digest: Self::digest_for(env, scope.clone(), message),
            scope,
        };

        env.storage()
            .persistent()
            .get(&DataKey::Approvals(key))
            .unwrap_or_else(|| Vec::new(env))
    }

    fn has_approved(env: &Env, scope: Address, message: Bytes, signer: Address) -> bool {
        let key = ApprovalKey {
            digest: Self::digest_for(env, scope.clone(), message),
            scope,
        };

        env.storage()
            .persistent()
            .has(&DataKey::Approved(key, signer))
    }
}

fn is_non_zero(scalar: &[u8]) -> bool {
    scalar.iter().any(|b| *b != 0)
}

fn personal_message_hash(env: &Env, digest: &BytesN<32>) -> Hash<32> {
    let mut msg = Bytes::from_array(env, PERSONAL_MESSAGE_PREFIX);
    msg.extend_from_array(&digest.to_array());

    env.crypto().keccak256(&msg)
}

/// The address is the last 20 bytes of the keccak256 hash of the uncompressed public key, without its `0x04` tag.
fn address_from_public_key(env: &Env, public_key: BytesN<65>) -> BytesN<20> {
    let public_key: Bytes = public_key.into();
    let hash = env.crypto().keccak256(&public_key.slice(1..)).to_array();

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);

    BytesN::from_array(env, &address)
}
