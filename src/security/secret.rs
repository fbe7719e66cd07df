//! Zeroize-on-drop buffers for share and secret material.
use zeroize::Zeroizing;

/// Secret byte buffer that is wiped when dropped.
pub type SecretVec = Zeroizing<Vec<u8>>;

/// Move a plain `Vec<u8>` into a [`SecretVec`].
pub fn vec_to_secret(v: Vec<u8>) -> SecretVec {
    Zeroizing::new(v)
}
