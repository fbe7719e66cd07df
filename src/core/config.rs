use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::errors::{RecoveryError, Result};

/// Settings for one recovery run.
///
/// Usually built from CLI flags; a TOML file can provide the same fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Files holding one share each.
    #[serde(default)]
    pub shares: Vec<PathBuf>,

    /// JSON key map listing the accounts to recover.
    #[serde(default)]
    pub keymap: Option<PathBuf>,

    /// CSV destination.
    #[serde(default = "RecoveryConfig::default_target")]
    pub target: PathBuf,

    /// Wallet kind whose manifest address replaces the derived one.
    #[serde(default = "RecoveryConfig::default_onchain_wallet")]
    pub onchain_wallet: String,
}

impl RecoveryConfig {
    fn default_target() -> PathBuf {
        PathBuf::from("keys.csv")
    }

    fn default_onchain_wallet() -> String {
        "ONCHAIN".to_string()
    }

    /// Parse a TOML configuration.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| RecoveryError::InputFormat(format!("config: {}", e)))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check the run has everything it needs.
    pub fn validate(&self) -> Result<()> {
        if self.shares.len() < 2 {
            return Err(RecoveryError::InputFormat(format!(
                "at least two shares are required, got {}",
                self.shares.len()
            )));
        }
        if self.keymap.is_none() {
            return Err(RecoveryError::InputFormat("keymap is required".to_string()));
        }
        if self.onchain_wallet.is_empty() {
            return Err(RecoveryError::InputFormat("onchain_wallet cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            shares: Vec::new(),
            keymap: None,
            target: Self::default_target(),
            onchain_wallet: Self::default_onchain_wallet(),
        }
    }
}
