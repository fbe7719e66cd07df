//! secp256k1 keys with checksummed Ethereum-style addresses.
use std::io::Read;

use ::secp256k1::{PublicKey, Secp256k1, SecretKey};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::checksum::to_checksum_address;
use super::ELLIPTIC_CURVE_SECP256K1;
use crate::core::errors::{RecoveryError, Result};
use crate::registry::{GeneratedKeypair, GeneratorRegistry};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register(ELLIPTIC_CURVE_SECP256K1, generate_key);
}

/// Draw 32-byte big-endian candidates until one lies in `[1, n-1]`.
pub fn sample_secret_key(seed: &mut dyn Read) -> Result<SecretKey> {
    let mut candidate = Zeroizing::new([0u8; 32]);
    let mut rejected = 0u32;
    loop {
        seed.read_exact(&mut candidate[..]).map_err(|e| {
            RecoveryError::key_generation(
                ELLIPTIC_CURVE_SECP256K1,
                format!("seed stream after {} rejected candidates: {}", rejected, e),
            )
        })?;
        match SecretKey::from_slice(&candidate[..]) {
            Ok(key) => {
                if rejected > 0 {
                    warn!(rejected, "Rejected out-of-range secp256k1 scalars");
                }
                return Ok(key);
            }
            Err(_) => rejected += 1,
        }
    }
}

/// Derive a keypair from the seed stream.
///
/// Address: checksummed `0x` address of the uncompressed public key.
/// Private key: `0x` + 64 lowercase hex characters.
pub fn generate_key(seed: &mut dyn Read) -> Result<GeneratedKeypair> {
    let secret_key = sample_secret_key(seed)?;

    let secp = Secp256k1::signing_only();
    let public_key = PublicKey::from_secret_key(&secp, &secret_key);
    let uncompressed = public_key.serialize_uncompressed();
    let mut point = [0u8; 64];
    point.copy_from_slice(&uncompressed[1..]);

    let address = to_checksum_address(&point);
    debug!(address = %address, "Derived secp256k1 keypair");

    let secret_bytes = Zeroizing::new(secret_key.secret_bytes());
    Ok(GeneratedKeypair { address, private_key: format!("0x{}", hex::encode(&secret_bytes[..])) })
}
