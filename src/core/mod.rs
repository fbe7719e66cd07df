pub mod config;
pub mod errors;

pub use config::RecoveryConfig;
pub use errors::{RecoveryError, Result};
