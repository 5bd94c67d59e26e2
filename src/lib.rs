//! Poseidon hashing and binding commitments over the STARK field.
//!
//! The crate computes collision-resistant digests of field-element
//! sequences with the Poseidon (Hades) permutation, instantiated with
//! Starkware's production parameters over `p = 2^251 + 17 * 2^192 + 1`.
//! Digests match the vectors published for Starknet tooling, so a
//! commitment produced here verifies against any conforming
//! implementation.
//!
//! # Architecture
//!
//! - [`field`] - STARK field element (`Fp`), wrapping the
//!   `starknet-types-core` arithmetic
//! - [`poseidon`] - parameter set, Hades permutation, and the
//!   hash/sponge entry points
//! - [`commitment`] - digest binding a `(value, secret)` pair
//! - [`error`] - configuration and contract-violation errors
//!
//! # Example
//!
//! ```
//! use poseidon_commit::{commit, Fp};
//!
//! let digest = commit(Fp::from_u64(1), Fp::from_u64(1));
//! assert_eq!(
//!     digest.to_hex(),
//!     "0x32185493717c7b81d77195f57104754bbf86874512da9df199203b1012164d8",
//! );
//! ```

// Digest computation must not panic in library code.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod commitment;
pub mod error;
pub mod field;
pub mod poseidon;

// Re-export commonly used items
pub use commitment::{commit, Commitment};
pub use error::{PoseidonError, PoseidonResult};
pub use field::Fp;
pub use poseidon::{
    hash_many, hash_many_n, hash_pair, hash_single, permute, PoseidonParams, Sponge,
};
