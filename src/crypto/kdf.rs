//! Per-account key derivation.
//!
//! Every account is identified by `(organization_id, address_sub_id, network_id)`.
//! The triple is hashed into a [`DerivationTag`], which becomes the HKDF `info`
//! parameter over the reconstructed master secret. The resulting [`SeedStream`] is
//! the entropy source a curve generator reads its key material from.
use std::fmt;
use std::io::{self, Read};

use hkdf::Hkdf;
use sha2::{Digest, Sha256, Sha512};
use tracing::debug;
use zeroize::Zeroizing;

use crate::security::redact_bytes;

/// Joins the derivation parameters before hashing.
///
/// Fields containing `:` can collide with a different triple
/// (`"a:b", "c"` vs `"a", "b:c"`). Existing backups depend on this encoding.
pub const KEY_DERIVATION_SEPARATOR: &str = ":";

/// HKDF-SHA512 can expand to at most 255 blocks of 64 bytes.
const MAX_OUTPUT_LEN: usize = 255 * 64;

/// SHA-256 digest of the joined derivation parameters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivationTag([u8; 32]);

impl DerivationTag {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl AsRef<[u8]> for DerivationTag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for DerivationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivationTag({})", hex::encode(self.0))
    }
}

/// Serialize the key derivation parameters into their tag.
pub fn build_tag(organization_id: &str, address_sub_id: &str, network_id: &str) -> DerivationTag {
    let joined = [organization_id, address_sub_id, network_id].join(KEY_DERIVATION_SEPARATOR);
    let digest = Sha256::digest(joined.as_bytes());
    let mut tag = [0u8; 32];
    tag.copy_from_slice(&digest);
    DerivationTag(tag)
}

/// HKDF-SHA512 output stream (RFC 5869, no salt).
///
/// The full bounded output is expanded on the first read and served from a
/// cursor, so two streams built from the same secret and tag yield identical
/// bytes. After 16320 bytes the stream is exhausted and further reads return
/// `Ok(0)`.
pub struct SeedStream {
    prk: Zeroizing<Vec<u8>>,
    info: Vec<u8>,
    okm: Option<Zeroizing<Vec<u8>>>,
    offset: usize,
}

impl SeedStream {
    fn new(prk: Zeroizing<Vec<u8>>, info: &[u8]) -> Self {
        Self { prk, info: info.to_vec(), okm: None, offset: 0 }
    }

    fn expanded(&mut self) -> io::Result<&[u8]> {
        if self.okm.is_none() {
            let hk = Hkdf::<Sha512>::from_prk(&self.prk)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
            let mut okm = Zeroizing::new(vec![0u8; MAX_OUTPUT_LEN]);
            hk.expand(&self.info, &mut okm)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
            self.okm = Some(okm);
        }
        Ok(self.okm.as_deref().map(Vec::as_slice).unwrap_or_default())
    }

    /// Bytes left before the stream is exhausted.
    pub fn remaining(&self) -> usize {
        MAX_OUTPUT_LEN - self.offset
    }
}

impl Read for SeedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let offset = self.offset;
        let okm = self.expanded()?;
        let n = (okm.len() - offset).min(buf.len());
        buf[..n].copy_from_slice(&okm[offset..offset + n]);
        self.offset += n;
        Ok(n)
    }
}

impl fmt::Debug for SeedStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedStream")
            .field("prk", &redact_bytes(&self.prk))
            .field("bytes_read", &self.offset)
            .finish()
    }
}

/// Expand the master secret into the seed stream for one account.
pub fn derive_seed_stream(master_secret: &[u8], tag: &DerivationTag) -> SeedStream {
    let (prk, _) = Hkdf::<Sha512>::extract(None, master_secret);
    let prk = Zeroizing::new(prk.to_vec());
    debug!(tag = ?tag, "Derived per-account seed stream");
    SeedStream::new(prk, tag.as_ref())
}

/// Convenience wrapper: tag and stream for one account in a single call.
pub fn recover_seed(
    master_secret: &[u8],
    organization_id: &str,
    address_sub_id: &str,
    network_id: &str,
) -> SeedStream {
    let tag = build_tag(organization_id, address_sub_id, network_id);
    derive_seed_stream(master_secret, &tag)
}
