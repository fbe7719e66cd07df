//! Mixed-case checksum encoding for secp256k1 account addresses (EIP-55).
use sha3::{Digest, Keccak256};

/// Address for a 64-byte uncompressed public key (`X || Y`, no `0x04` prefix).
///
/// The raw address is the last 20 bytes of `keccak256(X || Y)`.
pub fn to_checksum_address(public_key: &[u8; 64]) -> String {
    let hash = Keccak256::digest(public_key);
    let mut raw = [0u8; 20];
    raw.copy_from_slice(&hash[12..]);
    checksum_encode(&raw)
}

/// `0x` + 40 hex characters, letters uppercased where the matching nibble of
/// `keccak256(lowercase hex)` is 8 or more.
pub fn checksum_encode(raw_address: &[u8; 20]) -> String {
    let lower = hex::encode(raw_address);
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 { hash[i / 2] >> 4 } else { hash[i / 2] & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// True when `address` is exactly the checksum encoding of its own bytes.
pub fn is_checksum_address(address: &str) -> bool {
    let Some(body) = address.strip_prefix("0x") else {
        return false;
    };
    if body.len() != 40 {
        return false;
    }
    let raw: [u8; 20] = match hex::decode(body).ok().and_then(|b| b.try_into().ok()) {
        Some(raw) => raw,
        None => return false,
    };
    checksum_encode(&raw) == address
}
