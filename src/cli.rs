use clap::Parser;
use std::path::PathBuf;

use crate::core::config::RecoveryConfig;

/// Recover account keys from backup shares (library-facing definitions)
#[derive(Debug, Parser)]
#[command(name = "recovery", about = "Recover account private keys from backup shares")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// File containing one share; repeat for every share
    #[arg(long = "shard", value_name = "PATH")]
    pub shards: Vec<PathBuf>,

    /// JSON key map listing the accounts to recover
    #[arg(long)]
    pub keymap: Option<PathBuf>,

    /// CSV file to write
    #[arg(long)]
    pub target: Option<PathBuf>,

    /// Optional TOML file with the same settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Overlay the flags on `base`; flags win over file values.
    pub fn merge_into(self, mut base: RecoveryConfig) -> RecoveryConfig {
        if !self.shards.is_empty() {
            base.shares = self.shards;
        }
        if self.keymap.is_some() {
            base.keymap = self.keymap;
        }
        if let Some(target) = self.target {
            base.target = target;
        }
        base
    }
}
