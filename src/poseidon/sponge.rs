//! Hash entry points over the Hades permutation.
//!
//! Three named operations share the absorb-permute-squeeze core:
//!
//! - [`hash_single`] and [`hash_pair`] are one-shot constructions whose
//!   capacity slot carries the input arity (1 or 2) as a domain
//!   separator.
//! - [`hash_many`] is the variable-length sponge: input is extended with
//!   a single `1` marker, zero-padded to a multiple of the rate, and
//!   absorbed two elements per permutation; the digest is slot 0 of the
//!   final state. The empty sequence is not rejected, it hashes the bare
//!   marker and so maps to a fixed well-known digest.
//!
//! The three domains are deliberately distinct: `hash_single(x)`,
//! `hash_pair(x, 0)` and `hash_many(&[x])` all differ for the same `x`.

use super::params::PoseidonParams;
use super::permute::{hades_permutation, State};
use super::{RATE, WIDTH};
use crate::field::Fp;

/// Sponge operation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Accepting input elements.
    Absorbing,
    /// Producing output elements.
    Squeezing,
}

/// Incremental sponge for streaming absorption.
///
/// Each instance owns a private state buffer and only reads the shared
/// parameter set, so independent sponges may run on any number of
/// threads without synchronization.
#[derive(Debug, Clone)]
pub struct Sponge<'p> {
    state: State,
    pos: usize,
    phase: Phase,
    params: &'p PoseidonParams,
}

impl Sponge<'static> {
    /// Sponge over the production parameters, state initialized to zero.
    pub fn new() -> Self {
        Self::with_params(PoseidonParams::stark())
    }
}

impl Default for Sponge<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p> Sponge<'p> {
    /// Sponge over an explicit parameter set.
    pub fn with_params(params: &'p PoseidonParams) -> Self {
        Self {
            state: [Fp::ZERO; WIDTH],
            pos: 0,
            phase: Phase::Absorbing,
            params,
        }
    }

    /// Absorb a single element.
    ///
    /// The element is added into the current rate slot; a permutation
    /// runs whenever the rate portion fills. Absorbing after a squeeze
    /// re-enters the absorb phase duplex-style.
    pub fn absorb_one(&mut self, x: Fp) {
        if self.phase == Phase::Squeezing {
            hades_permutation(&mut self.state, self.params);
            self.phase = Phase::Absorbing;
            self.pos = 0;
        }

        self.state[self.pos] = self.state[self.pos] + x;
        self.pos += 1;

        if self.pos == RATE {
            hades_permutation(&mut self.state, self.params);
            self.pos = 0;
        }
    }

    /// Absorb a sequence of elements.
    pub fn absorb(&mut self, elements: &[Fp]) {
        for &x in elements {
            self.absorb_one(x);
        }
    }

    /// Squeeze one output element.
    ///
    /// The first squeeze closes the absorb phase: the end-of-input
    /// marker `1` is added at the current position (the rest of the rate
    /// stays zero) and the permutation runs. Every later squeeze re-runs
    /// the permutation and reads slot 0 again.
    pub fn squeeze_one(&mut self) -> Fp {
        match self.phase {
            Phase::Absorbing => {
                self.state[self.pos] = self.state[self.pos] + Fp::ONE;
                hades_permutation(&mut self.state, self.params);
                self.pos = 0;
                self.phase = Phase::Squeezing;
            }
            Phase::Squeezing => {
                hades_permutation(&mut self.state, self.params);
            }
        }
        self.state[0]
    }

    /// Squeeze `n` output elements.
    pub fn squeeze(&mut self, n: usize) -> Vec<Fp> {
        (0..n).map(|_| self.squeeze_one()).collect()
    }
}

/// One-shot permutation of a fully specified initial state, returning
/// slot 0. The capacity value is what separates the fixed-arity hash
/// domains.
fn fixed_arity(mut state: State) -> Fp {
    hades_permutation(&mut state, PoseidonParams::stark());
    state[0]
}

/// Hash a single field element: slot 0 of `permute([x, 0, 1])`.
pub fn hash_single(x: Fp) -> Fp {
    fixed_arity([x, Fp::ZERO, Fp::ONE])
}

/// Hash an ordered pair: slot 0 of `permute([x, y, 2])`.
pub fn hash_pair(x: Fp, y: Fp) -> Fp {
    fixed_arity([x, y, Fp::TWO])
}

/// Hash a variable-length sequence of field elements to one element.
///
/// Deterministic pure function of the sequence; different sequences
/// collide only with negligible probability. The empty sequence yields
/// the fixed digest of the bare padding marker.
pub fn hash_many(elements: &[Fp]) -> Fp {
    let mut sponge = Sponge::new();
    sponge.absorb(elements);
    sponge.squeeze_one()
}

/// Hash a variable-length sequence to `n` output elements.
pub fn hash_many_n(elements: &[Fp], n: usize) -> Vec<Fp> {
    let mut sponge = Sponge::new();
    sponge.absorb(elements);
    sponge.squeeze(n)
}
