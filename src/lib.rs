#![allow(clippy::needless_range_loop)]
// src/lib.rs
//! Offline key recovery.
//!
//! Reconstructs a master secret from Shamir shares and re-derives the key of every
//! account listed in a key map: `shamir` → `crypto::kdf` → `registry` → `curves`,
//! orchestrated by `recovery`.

pub mod cli;
pub mod core;
pub mod crypto;
pub mod curves;
pub mod manifest;
pub mod recovery;
pub mod registry;
pub mod security;
pub mod shamir;

pub use crate::core::{RecoveryConfig, RecoveryError};
pub use crate::manifest::{KeyDerivation, KeyMap};
pub use crate::recovery::{recover, write_csv, MasterSecret, RecoveredKey, Recovery};
pub use crate::registry::{GeneratedKeypair, GeneratorRegistry, KeyGenerator};
