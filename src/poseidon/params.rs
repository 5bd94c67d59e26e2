//! Poseidon parameter set: round-constant table and MDS matrix.
//!
//! The production instance is derived, not hardcoded: round constant `i`
//! is `sha256("Hades" || i)` reduced into the field, consumed three per
//! round, and the MDS matrix is `[[3, 1, 1], [1, -1, 1], [1, 1, -2]]`.
//! This is Starkware's published generation procedure; reproducing it
//! keeps the table honest without carrying 273 opaque literals.

use super::{FULL_ROUNDS, PARTIAL_ROUNDS, SBOX_ALPHA, TOTAL_ROUNDS, WIDTH};
use crate::error::{PoseidonError, PoseidonResult};
use crate::field::Fp;
use num_bigint::BigUint;
use num_integer::Integer;
use sha2::{Digest, Sha256};
use std::sync::OnceLock;

/// An immutable Poseidon parameter set.
///
/// Constructed once and shared read-only by every permutation call; no
/// runtime mutation is possible. All callers hashing in the same context
/// must use an identical set for their digests to be comparable.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseidonParams {
    alpha: u64,
    full_rounds: usize,
    partial_rounds: usize,
    ark: Vec<[Fp; WIDTH]>,
    mds: [[Fp; WIDTH]; WIDTH],
}

impl PoseidonParams {
    /// Build a parameter set from explicit tables.
    ///
    /// Fails when `alpha` is not invertible modulo `p - 1` (the S-box
    /// would not be a bijection), when `full_rounds` cannot be split
    /// into two equal blocks, or when the round-constant table does not
    /// have one row per round. Row width and the MDS shape are enforced
    /// by the array types.
    ///
    /// The permutation engine applies the cube S-box of the production
    /// instance; `alpha` is recorded for validation and inspection.
    pub fn new(
        alpha: u64,
        full_rounds: usize,
        partial_rounds: usize,
        ark: Vec<[Fp; WIDTH]>,
        mds: [[Fp; WIDTH]; WIDTH],
    ) -> PoseidonResult<Self> {
        if full_rounds % 2 != 0 {
            return Err(PoseidonError::OddFullRounds { full_rounds });
        }
        let rounds = full_rounds + partial_rounds;
        if ark.len() != rounds {
            return Err(PoseidonError::RoundConstantRows {
                expected: rounds,
                got: ark.len(),
            });
        }
        let p_minus_one = Fp::modulus() - 1u32;
        if BigUint::from(alpha).gcd(&p_minus_one) != BigUint::from(1u32) {
            return Err(PoseidonError::NonInvertibleSbox { alpha });
        }
        Ok(Self {
            alpha,
            full_rounds,
            partial_rounds,
            ark,
            mds,
        })
    }

    /// The production parameter set, derived once behind a one-time
    /// initialization barrier and shared for the life of the process.
    pub fn stark() -> &'static PoseidonParams {
        static PARAMS: OnceLock<PoseidonParams> = OnceLock::new();
        PARAMS.get_or_init(Self::derive_stark)
    }

    /// Derive the production tables. Infallible: the schedule constants
    /// are even/fixed and each table row is built in place, so none of
    /// the `new()` checks can fire; a unit test keeps `new()` and this
    /// construction in agreement.
    fn derive_stark() -> PoseidonParams {
        let ark = (0..TOTAL_ROUNDS)
            .map(|round| {
                let mut row = [Fp::ZERO; WIDTH];
                for (i, slot) in row.iter_mut().enumerate() {
                    *slot = round_constant(WIDTH * round + i);
                }
                row
            })
            .collect();
        PoseidonParams {
            alpha: SBOX_ALPHA,
            full_rounds: FULL_ROUNDS,
            partial_rounds: PARTIAL_ROUNDS,
            ark,
            mds: mds_matrix(),
        }
    }

    /// S-box exponent.
    pub fn alpha(&self) -> u64 {
        self.alpha
    }

    /// Number of full rounds.
    pub fn full_rounds(&self) -> usize {
        self.full_rounds
    }

    /// Number of partial rounds.
    pub fn partial_rounds(&self) -> usize {
        self.partial_rounds
    }

    /// Total rounds in the schedule.
    pub fn rounds(&self) -> usize {
        self.full_rounds + self.partial_rounds
    }

    pub(crate) fn round_constants(&self, round: usize) -> &[Fp; WIDTH] {
        &self.ark[round]
    }

    pub(crate) fn mds(&self) -> &[[Fp; WIDTH]; WIDTH] {
        &self.mds
    }
}

/// Round constant `idx`: sha256 of the ASCII string `Hades<idx>`, taken
/// as a big-endian integer and reduced into the field.
fn round_constant(idx: usize) -> Fp {
    let digest = Sha256::digest(format!("Hades{idx}").as_bytes());
    Fp::from_be_bytes_reduced(digest.as_slice())
}

/// The 3x3 MDS matrix `[[3, 1, 1], [1, -1, 1], [1, 1, -2]]`.
fn mds_matrix() -> [[Fp; WIDTH]; WIDTH] {
    [
        [Fp::THREE, Fp::ONE, Fp::ONE],
        [Fp::ONE, -Fp::ONE, Fp::ONE],
        [Fp::ONE, Fp::ONE, -Fp::TWO],
    ]
}
