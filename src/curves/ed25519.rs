//! Ed25519 keys, encoded the way Solana wallets expect.
use std::io::Read;

use ed25519_dalek::{SigningKey, SECRET_KEY_LENGTH};
use tracing::debug;
use zeroize::Zeroizing;

use super::ELLIPTIC_CURVE_ED25519;
use crate::core::errors::{RecoveryError, Result};
use crate::registry::{GeneratedKeypair, GeneratorRegistry};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register(ELLIPTIC_CURVE_ED25519, generate_key);
}

/// Read a 32-byte seed and derive the keypair from it.
///
/// Address: base58 of the 32-byte public key.
/// Private key: base58 of the 64-byte `seed || public key` form.
pub fn generate_key(seed: &mut dyn Read) -> Result<GeneratedKeypair> {
    let mut secret = Zeroizing::new([0u8; SECRET_KEY_LENGTH]);
    seed.read_exact(&mut secret[..]).map_err(|e| {
        RecoveryError::key_generation(ELLIPTIC_CURVE_ED25519, format!("seed stream: {}", e))
    })?;

    let signing_key = SigningKey::from_bytes(&secret);
    let public_key = signing_key.verifying_key().to_bytes();
    let keypair_bytes = Zeroizing::new(signing_key.to_keypair_bytes());

    let address = bs58::encode(public_key).into_string();
    debug!(address = %address, "Derived ed25519 keypair");

    Ok(GeneratedKeypair { address, private_key: bs58::encode(&keypair_bytes[..]).into_string() })
}
