//! STARK field element.
//!
//! Wraps `starknet_types_core::felt::Felt`, the canonical element type
//! for the prime `p = 2^251 + 17 * 2^192 + 1`. Values are always held in
//! reduced form `[0, p)`; constructors that accept wider inputs reduce
//! modulo the prime rather than reject, since any integer has a
//! well-defined residue.

use crate::error::{PoseidonError, PoseidonResult};
use num_bigint::BigUint;
use starknet_types_core::felt::Felt;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An element of the STARK prime field.
///
/// Immutable value type; all arithmetic is closed over the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fp(Felt);

impl Fp {
    /// The additive identity (zero).
    pub const ZERO: Fp = Fp(Felt::ZERO);

    /// The multiplicative identity (one).
    pub const ONE: Fp = Fp(Felt::ONE);

    /// The constant two.
    pub const TWO: Fp = Fp(Felt::TWO);

    /// The constant three.
    pub const THREE: Fp = Fp(Felt::THREE);

    /// Create an Fp from a u64 value.
    pub fn from_u64(val: u64) -> Fp {
        Fp(Felt::from(val))
    }

    /// Parse from a hexadecimal string, with or without a `0x` prefix.
    ///
    /// Values at or above the prime are reduced into the field. Only a
    /// string that is not valid hex (or wider than 256 bits) is an
    /// error.
    pub fn from_hex(hex_str: &str) -> PoseidonResult<Fp> {
        let digits = hex_str
            .strip_prefix("0x")
            .or_else(|| hex_str.strip_prefix("0X"))
            .unwrap_or(hex_str);
        Felt::from_hex(&format!("0x{digits}"))
            .map(Fp)
            .map_err(|_| PoseidonError::InvalidEncoding(hex_str.to_string()))
    }

    /// Parse from a decimal string, reduced into the field.
    pub fn from_dec(dec_str: &str) -> PoseidonResult<Fp> {
        Felt::from_dec_str(dec_str)
            .map(Fp)
            .map_err(|_| PoseidonError::InvalidEncoding(dec_str.to_string()))
    }

    /// Interpret a big-endian byte string as an integer and reduce it
    /// into the field. Accepts any length; used for absorbing byte-level
    /// inputs and for deriving round constants from digests.
    pub fn from_be_bytes_reduced(bytes: &[u8]) -> Fp {
        Fp(Felt::from_bytes_be_slice(bytes))
    }

    /// Canonical 32-byte big-endian representation.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_bytes_be()
    }

    /// Lowercase `0x`-prefixed hex form, without leading zeros.
    ///
    /// Matches the output of Python's `hex()` on the same integer, so a
    /// digest renders identically in both ecosystems.
    pub fn to_hex(&self) -> String {
        self.0.to_hex_string()
    }

    /// Decimal form of the canonical representative.
    pub fn to_decimal(&self) -> String {
        self.0.to_biguint().to_string()
    }

    /// The canonical representative as an arbitrary-precision integer.
    pub fn to_biguint(&self) -> BigUint {
        self.0.to_biguint()
    }

    /// Compute x^3 (the Poseidon S-box power for this field).
    pub fn cube(&self) -> Fp {
        Fp(self.0 * self.0 * self.0)
    }

    /// The field modulus `p = 2^251 + 17 * 2^192 + 1`.
    pub fn modulus() -> BigUint {
        Felt::MAX.to_biguint() + 1u32
    }

    /// Access the underlying collaborator type.
    pub fn inner(&self) -> &Felt {
        &self.0
    }
}

impl Default for Fp {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for Fp {
    fn from(val: u64) -> Self {
        Fp::from_u64(val)
    }
}

impl From<Felt> for Fp {
    fn from(felt: Felt) -> Self {
        Fp(felt)
    }
}

impl Add for Fp {
    type Output = Fp;
    fn add(self, rhs: Fp) -> Fp {
        Fp(self.0 + rhs.0)
    }
}

impl Sub for Fp {
    type Output = Fp;
    fn sub(self, rhs: Fp) -> Fp {
        Fp(self.0 - rhs.0)
    }
}

impl Mul for Fp {
    type Output = Fp;
    fn mul(self, rhs: Fp) -> Fp {
        Fp(self.0 * rhs.0)
    }
}

impl Neg for Fp {
    type Output = Fp;
    fn neg(self) -> Fp {
        Fp(-self.0)
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}
