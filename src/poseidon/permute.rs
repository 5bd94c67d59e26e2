//! The Hades permutation.
//!
//! The schedule runs 91 rounds over a 3-element state:
//! - 4 full rounds (S-box on every slot)
//! - 83 partial rounds (S-box on the capacity slot only)
//! - 4 full rounds
//!
//! Each round adds the round constants, applies the S-box `x^3`, and
//! multiplies the state by the MDS matrix. The linear layer runs in
//! every round, including the last. The round count never depends on the
//! input, so a permutation call always performs the same amount of work.

use super::params::PoseidonParams;
use super::WIDTH;
use crate::error::{PoseidonError, PoseidonResult};
use crate::field::Fp;

/// A permutation state: `WIDTH` field elements, owned exclusively by one
/// permutation invocation.
pub type State = [Fp; WIDTH];

/// Apply the S-box (x^3) to a field element.
#[inline]
fn sbox(x: Fp) -> Fp {
    x.cube()
}

/// Add the round's constants, one per state slot.
fn add_round_constants(state: &mut State, params: &PoseidonParams, round: usize) {
    let constants = params.round_constants(round);
    for (slot, constant) in state.iter_mut().zip(constants.iter()) {
        *slot = *slot + *constant;
    }
}

/// Multiply the state vector by the MDS matrix: state' = MDS * state.
fn apply_mds(state: &State, params: &PoseidonParams) -> State {
    let mds = params.mds();
    let mut result = [Fp::ZERO; WIDTH];
    for (out, row) in result.iter_mut().zip(mds.iter()) {
        let mut sum = Fp::ZERO;
        for (cell, value) in row.iter().zip(state.iter()) {
            sum = sum + *cell * *value;
        }
        *out = sum;
    }
    result
}

/// Full round: constants, S-box on every slot, MDS.
fn full_round(state: &mut State, params: &PoseidonParams, round: usize) {
    add_round_constants(state, params, round);
    for slot in state.iter_mut() {
        *slot = sbox(*slot);
    }
    *state = apply_mds(state, params);
}

/// Partial round: constants, S-box on the last slot only, MDS.
///
/// The linear layer still diffuses the non-linear slot across the whole
/// state over the following rounds.
fn partial_round(state: &mut State, params: &PoseidonParams, round: usize) {
    add_round_constants(state, params, round);
    state[WIDTH - 1] = sbox(state[WIDTH - 1]);
    *state = apply_mds(state, params);
}

/// Run the complete Hades permutation in place.
///
/// The state is the only thing mutated; the parameter set is read-only
/// and shared. Callers composing custom constructions can pass their own
/// parameter set, everything in this crate uses [`PoseidonParams::stark`].
pub fn hades_permutation(state: &mut State, params: &PoseidonParams) {
    let half_full = params.full_rounds() / 2;
    let mut round = 0;

    for _ in 0..half_full {
        full_round(state, params, round);
        round += 1;
    }

    for _ in 0..params.partial_rounds() {
        partial_round(state, params, round);
        round += 1;
    }

    for _ in 0..half_full {
        full_round(state, params, round);
        round += 1;
    }
}

/// Width-checked permutation over the production parameters.
///
/// A slice whose length differs from [`WIDTH`] is a caller error,
/// reported immediately rather than padded.
pub fn permute(state: &[Fp]) -> PoseidonResult<State> {
    let mut st: State = state
        .try_into()
        .map_err(|_| PoseidonError::WidthMismatch {
            expected: WIDTH,
            got: state.len(),
        })?;
    hades_permutation(&mut st, PoseidonParams::stark());
    Ok(st)
}

/// Permutation with per-round snapshots.
///
/// Returns the final state together with the state after every round,
/// for localizing a divergence against another implementation round by
/// round.
pub fn permute_with_trace(state: &State, params: &PoseidonParams) -> (State, Vec<State>) {
    let mut st = *state;
    let half_full = params.full_rounds() / 2;
    let mut round = 0;
    let mut traces = Vec::with_capacity(params.rounds());

    for _ in 0..half_full {
        full_round(&mut st, params, round);
        traces.push(st);
        round += 1;
    }

    for _ in 0..params.partial_rounds() {
        partial_round(&mut st, params, round);
        traces.push(st);
        round += 1;
    }

    for _ in 0..half_full {
        full_round(&mut st, params, round);
        traces.push(st);
        round += 1;
    }

    (st, traces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permute_deterministic() {
        let state = [Fp::ONE, Fp::from_u64(2), Fp::from_u64(3)];
        assert_eq!(permute(&state).unwrap(), permute(&state).unwrap());
    }

    #[test]
    fn permute_rejects_wrong_width() {
        let short = [Fp::ONE, Fp::ONE];
        assert_eq!(
            permute(&short),
            Err(PoseidonError::WidthMismatch {
                expected: WIDTH,
                got: 2
            })
        );
        let long = [Fp::ONE; 4];
        assert_eq!(
            permute(&long),
            Err(PoseidonError::WidthMismatch {
                expected: WIDTH,
                got: 4
            })
        );
    }

    #[test]
    fn trace_covers_every_round() {
        let params = PoseidonParams::stark();
        let state = [Fp::ONE, Fp::from_u64(2), Fp::ZERO];
        let (final_state, traces) = permute_with_trace(&state, params);
        assert_eq!(traces.len(), params.rounds());
        assert_eq!(final_state, traces[traces.len() - 1]);
    }

    #[test]
    fn trace_matches_permute() {
        let state = [Fp::ONE, Fp::from_u64(2), Fp::ZERO];
        let (traced, _) = permute_with_trace(&state, PoseidonParams::stark());
        assert_eq!(traced, permute(&state).unwrap());
    }
}
