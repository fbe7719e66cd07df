//! # Shamir secret sharing over GF(2^8)
//!
//! Splits a secret into byte-wise shares and recombines a threshold of them with
//! Lagrange interpolation at `x = 0`.
//!
//! ## Share encoding
//!
//! - bytes `0..len-1`: one y-value per secret byte
//! - last byte: the share's x-coordinate (never zero, unique within a split)
//!
//! A share therefore is exactly one byte longer than the secret. Nothing else is
//! embedded: there is no threshold byte and no digest of the original secret, so
//! combining an incompatible set of shares yields a wrong secret rather than an error.
//!
//! ## Field
//!
//! GF(2^8) with the AES reduction polynomial `0x11b`; addition is xor.
//!
//! ```rust
//! # use custody_recovery::shamir::{split_secret, combine_shares};
//! let secret = b"hello";
//! let shares = split_secret(secret, 3, 5).unwrap();
//! let subset = vec![shares[0].clone(), shares[2].clone(), shares[4].clone()];
//! let recovered = combine_shares(&subset).unwrap();
//! assert_eq!(recovered.as_slice(), secret.as_slice());
//! ```
use crate::security::SecretVec;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Shamir error type
#[derive(Debug, thiserror::Error)]
pub enum ShamirError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("Failed to split secret: {0}")]
    SplitFailed(String),
    #[error("Failed to combine shares: {0}")]
    CombineFailed(String),
}

/// Low byte of the AES polynomial 0x11b, applied after a shift overflows.
const POLY: u8 = 0x1b;

fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut r: u8 = 0;
    while b != 0 {
        if (b & 1) != 0 {
            r ^= a;
        }
        let hi = (a & 0x80) != 0;
        a <<= 1;
        if hi {
            a ^= POLY;
        }
        b >>= 1;
    }
    r
}

fn gf_pow(mut a: u8, mut e: u8) -> u8 {
    let mut r = 1u8;
    while e != 0 {
        if (e & 1) != 0 {
            r = gf_mul(r, a);
        }
        a = gf_mul(a, a);
        e >>= 1;
    }
    r
}

fn gf_inv(a: u8) -> u8 {
    // Callers reject duplicate x-coordinates, so no denominator is ever zero.
    assert!(a != 0, "gf_inv(0)");
    // a^254 == a^-1 in GF(2^8)
    gf_pow(a, 0xfe)
}

/// Evaluate `coeffs[0] + coeffs[1]*x + ...` with Horner's rule.
fn eval_poly_at(coeffs: &[u8], x: u8) -> u8 {
    coeffs.iter().rev().fold(0u8, |acc, &c| gf_mul(acc, x) ^ c)
}

/// Lagrange interpolation of the samples, evaluated at `x = 0`.
fn interpolate_at_zero(xs: &[u8], ys: &[u8]) -> u8 {
    let mut acc = 0u8;
    for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        let mut num = 1u8;
        let mut den = 1u8;
        for (j, &xj) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            // (0 - xj) / (xi - xj), subtraction is xor
            num = gf_mul(num, xj);
            den = gf_mul(den, xi ^ xj);
        }
        acc ^= gf_mul(yi, gf_mul(num, gf_inv(den)));
    }
    acc
}

/// Split `secret` into `total_shares` shares, any `threshold` of which recombine it.
pub fn split_secret(
    secret: &[u8],
    threshold: u8,
    total_shares: u8,
) -> Result<Vec<SecretVec>, ShamirError> {
    if total_shares < threshold {
        return Err(ShamirError::InvalidParameters(
            "Threshold cannot be greater than total shares".to_string(),
        ));
    }
    if threshold < 2 {
        return Err(ShamirError::InvalidParameters("Threshold must be at least 2".to_string()));
    }
    if secret.is_empty() {
        return Err(ShamirError::InvalidParameters("Secret cannot be empty".to_string()));
    }

    let mut rng = rand::rngs::OsRng;

    // distinct, non-zero x-coordinates
    let mut candidates: Vec<u8> = (1..=255u8).collect();
    candidates.shuffle(&mut rng);
    let xs = &candidates[..total_shares as usize];

    let mut shares: Vec<SecretVec> = xs
        .iter()
        .map(|_| SecretVec::new(Vec::with_capacity(secret.len() + 1)))
        .collect();

    let mut coeffs = SecretVec::new(vec![0u8; threshold as usize]);
    for &b in secret {
        coeffs[0] = b;
        for c in coeffs.iter_mut().skip(1) {
            *c = rng.gen();
        }
        for (share, &x) in shares.iter_mut().zip(xs) {
            share.push(eval_poly_at(&coeffs, x));
        }
    }
    for (share, &x) in shares.iter_mut().zip(xs) {
        share.push(x);
    }
    debug!(threshold, total_shares, secret_len = secret.len(), "Secret split into shares");
    Ok(shares)
}

/// Recombine shares produced by [`split_secret`].
///
/// Succeeds for any set of at least two well-formed, distinct shares. Supplying fewer
/// than the split's threshold, or shares from different splits, returns a secret that
/// is not the original one.
pub fn combine_shares<S: AsRef<[u8]>>(shares: &[S]) -> Result<SecretVec, ShamirError> {
    if shares.len() < 2 {
        return Err(ShamirError::InvalidParameters(
            "At least two shares are required to reconstruct the secret".to_string(),
        ));
    }

    let share_len = shares[0].as_ref().len();
    if share_len < 2 {
        return Err(ShamirError::InvalidParameters(
            "Shares must be at least two bytes".to_string(),
        ));
    }
    for (idx, s) in shares.iter().enumerate() {
        if s.as_ref().len() != share_len {
            return Err(ShamirError::InvalidParameters(format!(
                "Share {} has length {}, expected {}",
                idx,
                s.as_ref().len(),
                share_len
            )));
        }
    }

    let mut seen = HashSet::with_capacity(shares.len());
    let mut xs = Vec::with_capacity(shares.len());
    for (idx, s) in shares.iter().enumerate() {
        let x = s.as_ref()[share_len - 1];
        if !seen.insert(x) {
            return Err(ShamirError::CombineFailed(format!(
                "Share {} duplicates the x-coordinate of an earlier share",
                idx
            )));
        }
        xs.push(x);
    }

    let mut ys = SecretVec::new(vec![0u8; shares.len()]);
    let mut secret = SecretVec::new(vec![0u8; share_len - 1]);
    for (byte_idx, secret_byte) in secret.iter_mut().enumerate() {
        for (y, s) in ys.iter_mut().zip(shares) {
            *y = s.as_ref()[byte_idx];
        }
        *secret_byte = interpolate_at_zero(&xs, &ys);
    }

    debug!(shares = shares.len(), secret_len = secret.len(), "Secret reconstructed");
    Ok(secret)
}
