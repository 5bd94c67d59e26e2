//! Commitment scenario tests.
//!
//! Exercises the (value, secret) commitment flow end to end: the
//! published digest for the (1, 1) pair, binding across sampled pairs,
//! and reproducibility across independent computations.

use poseidon_commit::{commit, hash_many, Fp};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

#[test]
fn published_commitment_vector() {
    // commit(1, 1): the move/secret example pair, cross-checked against
    // the reference implementation in both display forms.
    let commitment = commit(Fp::from_u64(1), Fp::from_u64(1));
    assert_eq!(
        commitment.to_decimal(),
        "1416164405029674324331909544155980085306730986792554086473471855678221018328"
    );
    assert_eq!(
        commitment.to_hex(),
        "0x32185493717c7b81d77195f57104754bbf86874512da9df199203b1012164d8"
    );
}

#[test]
fn commitment_matches_hash_many() {
    let value = Fp::from_u64(2);
    let secret = Fp::from_u64(12345);
    let commitment = commit(value, secret);
    assert_eq!(commitment.digest(), hash_many(&[value, secret]));
    assert_eq!(
        commitment.to_hex(),
        "0x23a8800595758c81eefa37292d1e434865100cd1b30f7a0bc1c24c591bc8878"
    );
}

#[test]
fn same_pair_reproduces_across_computations() {
    let value = Fp::from_u64(3);
    let secret = Fp::from_hex("0xdeadbeefcafe").unwrap();
    let first = commit(value, secret);
    for _ in 0..10 {
        assert_eq!(commit(value, secret), first);
    }
}

#[test]
fn sampled_pairs_never_collide() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut pairs = HashSet::new();
    let mut digests = HashSet::new();
    for _ in 0..256 {
        let value = Fp::from_u64(rng.gen_range(0..3));
        let secret = Fp::from_u64(rng.gen());
        if pairs.insert((value, secret)) {
            digests.insert(commit(value, secret).digest());
        }
    }
    assert_eq!(
        digests.len(),
        pairs.len(),
        "distinct pairs must produce distinct digests"
    );
}

#[test]
fn digest_roundtrips_through_display_forms() {
    let commitment = commit(Fp::from_u64(7), Fp::from_u64(1234567890));
    let from_dec = Fp::from_dec(&commitment.to_decimal()).unwrap();
    let from_hex = Fp::from_hex(&commitment.to_hex()).unwrap();
    assert_eq!(from_dec, commitment.digest());
    assert_eq!(from_hex, commitment.digest());
}
