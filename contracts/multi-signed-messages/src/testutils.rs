#![cfg(any(test, feature = "testutils"))]
extern crate std;

use rand::rngs::OsRng;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use sha3::{Digest, Keccak256};
use soroban_sdk::{BytesN, Env};

const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// An off-chain secp256k1 key together with its Ethereum-style address.
#[derive(Clone, Debug)]
pub struct TestSigner {
    pub secret_key: SecretKey,
    pub address: [u8; 20],
}

impl TestSigner {
    pub fn address(&self, env: &Env) -> BytesN<20> {
        BytesN::from_array(env, &self.address)
    }
}

pub fn generate_signer() -> TestSigner {
    let secp = Secp256k1::new();
    let secret_key = SecretKey::new(&mut OsRng);
    let public_key = PublicKey::from_secret_key(&secp, &secret_key);

    TestSigner {
        secret_key,
        address: eth_address(&public_key),
    }
}

pub fn eth_address(public_key: &PublicKey) -> [u8; 20] {
    let hash: [u8; 32] = Keccak256::digest(&public_key.serialize_uncompressed()[1..]).into();

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Signs `digest` the way wallets sign a personal message, returning `r || s || v` with `v` in `27/28` form.
pub fn sign_digest(env: &Env, signer: &TestSigner, digest: &BytesN<32>) -> BytesN<65> {
    let msg = Message::from_digest(personal_message_hash(digest));
    let (recovery_id, compact) = Secp256k1::new()
        .sign_ecdsa_recoverable(&msg, &signer.secret_key)
        .serialize_compact();

    let mut signature = [0u8; 65];
    signature[..64].copy_from_slice(&compact);
    signature[64] = recovery_id.to_i32() as u8 + 27;

    BytesN::from_array(env, &signature)
}

/// The hash a wallet signs for `digest`, computed off-chain.
pub fn personal_message_hash(digest: &BytesN<32>) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(PERSONAL_MESSAGE_PREFIX);
    hasher.update(digest.to_array());

    hasher.finalize().into()
}
