//! STARK prime field element (Fp).
//!
//! This module provides the `Fp` type used throughout the crate for
//! field arithmetic, Poseidon hashing, and commitment digests. The
//! arithmetic itself lives in `starknet-types-core`; `Fp` is a thin
//! wrapper fixing the encoding and display conventions this crate
//! relies on.

mod fp;

pub use fp::Fp;
