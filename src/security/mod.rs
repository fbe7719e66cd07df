// src/security/mod.rs
//! Handling of secret material: zeroizing buffers and log redaction.

pub mod redaction;
pub mod secret;

pub use redaction::{redact_bytes, redact_str};
pub use secret::{vec_to_secret, SecretVec};
