//! Poseidon hash over the STARK field.
//!
//! Implements the Hades permutation (width 3, cube S-box, 8 full and 83
//! partial rounds) and the sponge-based hash entry points built on it.
//! The parameter set matches Starkware's production instance, so digests
//! agree with the vectors published for Starknet tooling.

mod params;
mod permute;
mod sponge;

pub use params::PoseidonParams;
pub use permute::{hades_permutation, permute, permute_with_trace, State};
pub use sponge::{hash_many, hash_many_n, hash_pair, hash_single, Sponge};

/// Permutation state width (t = 3).
pub const WIDTH: usize = 3;

/// Sponge rate (r = 2).
pub const RATE: usize = 2;

/// Sponge capacity (c = 1).
pub const CAPACITY: usize = 1;

/// Number of full rounds (RF = 8), split evenly around the partial block.
pub const FULL_ROUNDS: usize = 8;

/// Number of partial rounds (RP = 83).
pub const PARTIAL_ROUNDS: usize = 83;

/// Total rounds (RF + RP = 91).
pub const TOTAL_ROUNDS: usize = FULL_ROUNDS + PARTIAL_ROUNDS;

/// S-box exponent (alpha = 3).
pub const SBOX_ALPHA: u64 = 3;
