//! Binding commitments over ordered value pairs.
//!
//! A commitment binds a hidden `(value, secret)` pair to a single field
//! element: the pair cannot be replaced after the fact without changing
//! the digest, and the digest does not reveal the pair while the secret
//! stays hidden. Opening and verification protocols are out of scope,
//! this module only computes the digest.

use crate::field::Fp;
use crate::poseidon::hash_many;
use std::fmt;

/// Digest binding an ordered `(value, secret)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment(Fp);

/// Commit to `value` blinded by `secret`.
///
/// The digest is `hash_many(&[value, secret])`, so the same pair always
/// reproduces the same digest and any change to either element changes
/// it.
pub fn commit(value: Fp, secret: Fp) -> Commitment {
    Commitment(hash_many(&[value, secret]))
}

impl Commitment {
    /// The digest as a field element.
    pub fn digest(&self) -> Fp {
        self.0
    }

    /// Decimal form of the digest.
    pub fn to_decimal(&self) -> String {
        self.0.to_decimal()
    }

    /// Hex form of the digest (`0x`-prefixed, lowercase).
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}
