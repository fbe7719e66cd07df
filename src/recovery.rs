//! Recovery pipeline: shares + key map in, one row per account out.
//!
//! The master secret is reconstructed once; every account then gets its own
//! seed stream from `(organization_id, address_sub_id, network_id)` and the
//! generator registered for its curve. Any failure aborts the whole run and no
//! rows are returned.
use std::fmt;
use std::io::Write;

use tracing::{debug, info};

use crate::core::errors::{RecoveryError, Result};
use crate::crypto::kdf::{build_tag, derive_seed_stream};
use crate::manifest::{KeyDerivation, KeyMap};
use crate::registry::{GeneratedKeypair, GeneratorRegistry};
use crate::security::{redact_bytes, redact_str, SecretVec};
use crate::shamir::combine_shares;

/// Column names of the output table.
pub const CSV_HEADER: [&str; 5] =
    ["Account", "Address", "PrivateKey", "Wallet", "Compatible Networks..."];

pub const DEFAULT_ONCHAIN_WALLET: &str = "ONCHAIN";

/// Secret reconstructed from the shares; wiped on drop, never printed.
pub struct MasterSecret(SecretVec);

impl MasterSecret {
    /// Combine the shares into the master secret.
    pub fn reconstruct<S: AsRef<[u8]>>(shares: &[S]) -> Result<Self> {
        info!(shares = shares.len(), "Reconstructing master secret");
        Ok(Self(combine_shares(shares)?))
    }

    pub fn expose(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for MasterSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MasterSecret({})", redact_bytes(&self.0))
    }
}

/// One output row.
#[derive(Clone, PartialEq, Eq)]
pub struct RecoveredKey {
    pub account: String,
    pub address: String,
    pub private_key: String,
    pub wallet: String,
    /// Comma-joined list of compatible networks.
    pub compatible_networks: String,
}

impl RecoveredKey {
    pub fn as_record(&self) -> [&str; 5] {
        [
            &self.account,
            &self.address,
            &self.private_key,
            &self.wallet,
            &self.compatible_networks,
        ]
    }
}

impl fmt::Debug for RecoveredKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecoveredKey")
            .field("account", &self.account)
            .field("address", &self.address)
            .field("private_key", &redact_str(&self.private_key))
            .field("wallet", &self.wallet)
            .field("compatible_networks", &self.compatible_networks)
            .finish()
    }
}

/// Derives account keys against a fixed generator registry.
#[derive(Debug, Clone)]
pub struct Recovery<'a> {
    registry: &'a GeneratorRegistry,
    onchain_wallet: String,
}

impl<'a> Recovery<'a> {
    pub fn new(registry: &'a GeneratorRegistry) -> Self {
        Self { registry, onchain_wallet: DEFAULT_ONCHAIN_WALLET.to_string() }
    }

    /// Override the wallet kind whose manifest address is kept.
    pub fn with_onchain_wallet(mut self, onchain_wallet: impl Into<String>) -> Self {
        self.onchain_wallet = onchain_wallet.into();
        self
    }

    /// Reconstruct the master secret and derive every account in key map order.
    pub fn recover<S: AsRef<[u8]>>(&self, shares: &[S], keymap: &KeyMap) -> Result<Vec<RecoveredKey>> {
        let secret = MasterSecret::reconstruct(shares)?;
        self.derive_all(&secret, keymap)
    }

    pub fn derive_all(&self, secret: &MasterSecret, keymap: &KeyMap) -> Result<Vec<RecoveredKey>> {
        info!(
            organization_id = %keymap.organization_id,
            accounts = keymap.keys.len(),
            "Deriving account keys"
        );
        keymap
            .keys
            .iter()
            .enumerate()
            .map(|(index, key)| {
                debug!(
                    index,
                    address_sub_id = %key.address_sub_id,
                    network_id = %key.network_id,
                    curve = %key.curve,
                    "Deriving account"
                );
                self.derive_one(secret, &keymap.organization_id, key)
            })
            .collect()
    }

    /// Derive the row for a single key map entry.
    pub fn derive_one(
        &self,
        secret: &MasterSecret,
        organization_id: &str,
        key: &KeyDerivation,
    ) -> Result<RecoveredKey> {
        let generator =
            self.registry.lookup(&key.curve).ok_or_else(|| RecoveryError::UnsupportedCurve {
                curve: key.curve.clone(),
                sub_id: key.address_sub_id.clone(),
            })?;

        let tag = build_tag(organization_id, &key.address_sub_id, &key.network_id);
        let mut seed = derive_seed_stream(secret.expose(), &tag);
        let GeneratedKeypair { address: derived, private_key } = generator(&mut seed).map_err(|e| match e {
            RecoveryError::KeyGeneration { curve, reason } => RecoveryError::KeyGeneration {
                curve,
                reason: format!("address_sub_id {}: {}", key.address_sub_id, reason),
            },
            other => other,
        })?;

        let address = if key.is_onchain(&self.onchain_wallet) {
            debug!(address_sub_id = %key.address_sub_id, "Using key map address for on-chain wallet");
            key.address.clone()
        } else {
            derived
        };

        Ok(RecoveredKey {
            account: key.account_name.clone(),
            address,
            private_key,
            wallet: key.wallet.clone(),
            compatible_networks: key.compatible_networks_joined(),
        })
    }
}

/// Run the full pipeline with the default on-chain marker.
pub fn recover<S: AsRef<[u8]>>(
    shares: &[S],
    keymap: &KeyMap,
    registry: &GeneratorRegistry,
) -> Result<Vec<RecoveredKey>> {
    Recovery::new(registry).recover(shares, keymap)
}

/// Write the header and one CSV record per row.
pub fn write_csv<W: Write>(writer: W, rows: &[RecoveredKey]) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(CSV_HEADER)?;
    for row in rows {
        w.write_record(row.as_record())?;
    }
    w.flush()?;
    Ok(())
}
