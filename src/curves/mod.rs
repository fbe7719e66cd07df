//! Curve families supported by the recovery pipeline.
//!
//! Adding a family means adding a module with a `generate_key` function matching
//! [`KeyGenerator`](crate::registry::KeyGenerator) and a `register` call below.

pub mod checksum;
pub mod ed25519;
pub mod secp256k1;

use crate::registry::GeneratorRegistry;

pub const ELLIPTIC_CURVE_ED25519: &str = "ELLIPTIC_CURVE_ED25519";
pub const ELLIPTIC_CURVE_SECP256K1: &str = "ELLIPTIC_CURVE_SECP256K1";

/// Register every built-in curve family.
pub fn register_all(registry: &mut GeneratorRegistry) {
    ed25519::register(registry);
    secp256k1::register(registry);
}
