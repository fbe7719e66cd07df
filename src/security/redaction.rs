// Helpers that keep secret material out of logs and Debug output.

/// Placeholder for a secret byte buffer: only its length is shown.
pub fn redact_bytes(bytes: &[u8]) -> String {
    format!("<redacted len={}>", bytes.len())
}

/// Placeholder for a secret string such as an encoded private key.
pub fn redact_str(s: &str) -> String {
    format!("<redacted len={}>", s.len())
}
