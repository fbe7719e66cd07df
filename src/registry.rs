//! Curve generator registry.
//!
//! Maps a curve identifier from the key map (`ELLIPTIC_CURVE_*`) to the function
//! that turns a seed stream into an address and private key. Each curve module
//! contributes a `register` function; the registry is filled once at startup and
//! then shared read-only with the recovery pipeline.
use std::collections::HashMap;
use std::fmt;
use std::io::Read;

use crate::core::errors::Result;
use crate::curves;
use crate::security::redact_str;

/// Address and private key in the curve's native text encoding.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedKeypair {
    pub address: String,
    pub private_key: String,
}

impl fmt::Debug for GeneratedKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedKeypair")
            .field("address", &self.address)
            .field("private_key", &redact_str(&self.private_key))
            .finish()
    }
}

/// Reads key material from a seed stream and encodes the resulting keypair.
pub type KeyGenerator = fn(&mut dyn Read) -> Result<GeneratedKeypair>;

#[derive(Clone, Default)]
pub struct GeneratorRegistry {
    generators: HashMap<String, KeyGenerator>,
}

impl GeneratorRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in curve family.
    pub fn with_default_curves() -> Self {
        let mut registry = Self::new();
        curves::register_all(&mut registry);
        registry
    }

    /// Insert or replace the generator for `curve_id`.
    pub fn register(&mut self, curve_id: impl Into<String>, generator: KeyGenerator) {
        self.generators.insert(curve_id.into(), generator);
    }

    pub fn lookup(&self, curve_id: &str) -> Option<KeyGenerator> {
        self.generators.get(curve_id).copied()
    }

    pub fn contains(&self, curve_id: &str) -> bool {
        self.generators.contains_key(curve_id)
    }

    /// Registered identifiers, sorted.
    pub fn curve_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.generators.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry").field("curves", &self.curve_ids()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{ed25519, secp256k1, ELLIPTIC_CURVE_ED25519, ELLIPTIC_CURVE_SECP256K1};

    fn fixed_generator(_seed: &mut dyn Read) -> Result<GeneratedKeypair> {
        Ok(GeneratedKeypair { address: "fixed".to_string(), private_key: "key".to_string() })
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = GeneratorRegistry::new();
        assert!(registry.is_empty());

        registry.register(ELLIPTIC_CURVE_SECP256K1, secp256k1::generate_key);
        assert!(registry.lookup(ELLIPTIC_CURVE_SECP256K1).is_some());

        // duplicate registration is accepted
        registry.register(ELLIPTIC_CURVE_SECP256K1, secp256k1::generate_key);
        assert!(registry.contains(ELLIPTIC_CURVE_SECP256K1));
        assert_eq!(registry.len(), 1);

        registry.register(ELLIPTIC_CURVE_ED25519, ed25519::generate_key);
        assert!(registry.lookup(ELLIPTIC_CURVE_ED25519).is_some());

        assert!(registry.lookup("NON_EXISTING").is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = GeneratorRegistry::new();
        registry.register(ELLIPTIC_CURVE_ED25519, ed25519::generate_key);
        registry.register(ELLIPTIC_CURVE_ED25519, fixed_generator);

        let generator = registry.lookup(ELLIPTIC_CURVE_ED25519).unwrap();
        let keypair = generator(&mut std::io::empty()).unwrap();
        assert_eq!(keypair.address, "fixed");
    }

    #[test]
    fn test_default_curves() {
        let registry = GeneratorRegistry::with_default_curves();
        assert_eq!(registry.curve_ids(), vec![ELLIPTIC_CURVE_ED25519, ELLIPTIC_CURVE_SECP256K1]);
    }

    #[test]
    fn test_keypair_debug_redacts_private_key() {
        let keypair = GeneratedKeypair {
            address: "addr".to_string(),
            private_key: "super-secret".to_string(),
        };
        let dbg = format!("{:?}", keypair);
        assert!(dbg.contains("addr"));
        assert!(!dbg.contains("super-secret"));
    }
}
