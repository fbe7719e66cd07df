use crate::shamir::ShamirError;

/// Errors raised while recovering account keys.
///
/// Messages identify the failing record (sub-id, curve) or share index, never
/// secret material, seeds or private keys.
#[derive(Debug, thiserror::Error)]
pub enum RecoveryError {
    /// Shares were malformed, too few, or degenerate.
    #[error("Failed to reconstruct the master secret: {0}")]
    Reconstruction(#[from] ShamirError),

    /// No generator is registered for the record's curve.
    #[error("Unsupported curve {curve} (address_sub_id {sub_id})")]
    UnsupportedCurve { curve: String, sub_id: String },

    /// A curve generator could not derive a keypair.
    #[error("Key generation failed for {curve}: {reason}")]
    KeyGeneration { curve: String, reason: String },

    /// The key map could not be parsed.
    #[error("Invalid key map: {0}")]
    InputFormat(String),

    /// Writing recovered rows failed.
    #[error("Failed to write output: {0}")]
    Output(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RecoveryError {
    pub fn key_generation(curve: &str, reason: impl Into<String>) -> Self {
        Self::KeyGeneration { curve: curve.to_string(), reason: reason.into() }
    }

    /// Whether the error came from share handling rather than a specific record.
    pub fn is_share_error(&self) -> bool {
        matches!(self, RecoveryError::Reconstruction(_))
    }
}

impl From<serde_json::Error> for RecoveryError {
    fn from(err: serde_json::Error) -> Self {
        RecoveryError::InputFormat(err.to_string())
    }
}

impl From<csv::Error> for RecoveryError {
    fn from(err: csv::Error) -> Self {
        RecoveryError::Output(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RecoveryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_curve_names_curve_and_record() {
        let err = RecoveryError::UnsupportedCurve {
            curve: "ELLIPTIC_CURVE_P256".to_string(),
            sub_id: "sub-1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ELLIPTIC_CURVE_P256"));
        assert!(msg.contains("sub-1"));
    }

    #[test]
    fn shamir_errors_convert() {
        let err: RecoveryError = ShamirError::CombineFailed("duplicate".to_string()).into();
        assert!(err.is_share_error());
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn json_errors_become_input_format() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RecoveryError = parse.into();
        assert!(matches!(err, RecoveryError::InputFormat(_)));
    }
}
