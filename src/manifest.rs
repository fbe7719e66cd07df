//! Key map describing the accounts to recover.
//!
//! ```json
//! {
//!   "organization_id": "…",
//!   "keys": [
//!     {
//!       "address_sub_id": "…",
//!       "network_id": "ethereum-mainnet",
//!       "curve": "ELLIPTIC_CURVE_SECP256K1",
//!       "wallet": "ONCHAIN",
//!       "address": "0x…",
//!       "account_name": "Treasury",
//!       "compatible_networks": ["ethereum-mainnet", "base-mainnet"]
//!     }
//!   ]
//! }
//! ```
//!
//! Every field is optional: missing or `null` values become empty, and unknown
//! fields are ignored. Backends that export nil lists write them as `null`.
use std::io::Read;

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::errors::Result;

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// One account entry of the key map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDerivation {
    // Key derivation parameters
    #[serde(default, deserialize_with = "null_as_default")]
    pub address_sub_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub network_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub curve: String,

    // Metadata carried into the output
    #[serde(default, deserialize_with = "null_as_default")]
    pub wallet: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub compatible_networks: Vec<String>,
}

impl KeyDerivation {
    /// Whether the manifest address replaces the derived one.
    pub fn is_onchain(&self, onchain_wallet: &str) -> bool {
        self.wallet == onchain_wallet
    }

    pub fn compatible_networks_joined(&self) -> String {
        self.compatible_networks.join(",")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMap {
    #[serde(default, deserialize_with = "null_as_default")]
    pub organization_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keys: Vec<KeyDerivation>,
}

impl KeyMap {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::RecoveryError;

    #[test]
    fn parses_minimal_entries() {
        let map = KeyMap::from_json_str(
            r#"{
                "organization_id": "org",
                "encrypted_backup": "ignored",
                "keys": [
                    {"address_sub_id": "s1", "network_id": "solana-devnet", "curve": "ELLIPTIC_CURVE_ED25519"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(map.organization_id, "org");
        assert_eq!(map.keys.len(), 1);
        let key = &map.keys[0];
        assert_eq!(key.wallet, "");
        assert!(key.compatible_networks.is_empty());
        assert!(!key.is_onchain("ONCHAIN"));
    }

    #[test]
    fn parses_metadata() {
        let map = KeyMap::from_reader(
            br#"{
                "organization_id": "org",
                "keys": [{
                    "address_sub_id": "s1",
                    "network_id": "ethereum-mainnet",
                    "curve": "ELLIPTIC_CURVE_SECP256K1",
                    "wallet": "ONCHAIN",
                    "address": "0xabc",
                    "account_name": "Treasury",
                    "compatible_networks": ["ethereum-mainnet", "base-mainnet"]
                }]
            }"#
            .as_slice(),
        )
        .unwrap();
        let key = &map.keys[0];
        assert!(key.is_onchain("ONCHAIN"));
        assert_eq!(key.account_name, "Treasury");
        assert_eq!(key.compatible_networks_joined(), "ethereum-mainnet,base-mainnet");
    }

    #[test]
    fn null_lists_parse_as_empty() {
        let map = KeyMap::from_json_str(
            r#"{
                "organization_id": "org",
                "keys": [{
                    "address_sub_id": "s1",
                    "network_id": "ethereum-mainnet",
                    "curve": "ELLIPTIC_CURVE_SECP256K1",
                    "wallet": "HOT",
                    "address": null,
                    "account_name": "Ops",
                    "compatible_networks": null
                }]
            }"#,
        )
        .unwrap();
        let key = &map.keys[0];
        assert!(key.compatible_networks.is_empty());
        assert_eq!(key.compatible_networks_joined(), "");
        assert_eq!(key.address, "");
        assert_eq!(key.account_name, "Ops");

        let map = KeyMap::from_json_str(r#"{"organization_id": "org", "keys": null}"#).unwrap();
        assert!(map.keys.is_empty());
    }

    #[test]
    fn missing_derivation_fields_default_to_empty() {
        let map = KeyMap::from_json_str(
            r#"{"keys": [{"address_sub_id": "s1", "curve": "ELLIPTIC_CURVE_ED25519"}]}"#,
        )
        .unwrap();
        assert_eq!(map.organization_id, "");
        assert_eq!(
            map.keys[0],
            KeyDerivation {
                address_sub_id: "s1".to_string(),
                curve: "ELLIPTIC_CURVE_ED25519".to_string(),
                ..Default::default()
            }
        );

        let map = KeyMap::from_json_str("{}").unwrap();
        assert_eq!(map, KeyMap::default());
    }

    #[test]
    fn wrong_value_type_is_input_error() {
        let res = KeyMap::from_json_str(r#"{"organization_id": "org", "keys": [{"network_id": 7}]}"#);
        assert!(matches!(res, Err(RecoveryError::InputFormat(_))));
    }

    #[test]
    fn malformed_json_is_input_error() {
        assert!(matches!(KeyMap::from_json_str("not json"), Err(RecoveryError::InputFormat(_))));
    }
}
