use alloc::vec::Vec;
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::RngCore;
use digest::Digest;
use nizkp_utils::{hashing_utils::field_elems_from_label, impl_deref, serde_utils::ArkObjectBytes};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Number of rounds used when proving a single preimage
pub const DEFAULT_MIMC_ROUNDS: usize = 100;

/// Number of rounds used by the benchmarks
pub const BENCHMARK_MIMC_ROUNDS: usize = 4095;

/// Public round constants of the permutation, one per round. The number of rounds is the length.
#[serde_as]
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct RoundConstants<F: PrimeField>(#[serde_as(as = "Vec<ArkObjectBytes>")] pub Vec<F>);

impl_deref!(RoundConstants<F: PrimeField>(Vec<F>));

impl<F: PrimeField> RoundConstants<F> {
    /// Sample `rounds` constants uniformly at random
    pub fn new_random<R: RngCore>(rng: &mut R, rounds: usize) -> Self {
        Self((0..rounds).map(|_| F::rand(rng)).collect())
    }

    /// Generate `rounds` constants by hashing a public label so that anyone can derive them
    pub fn new_from_label<D: Digest>(label: &[u8], rounds: usize) -> Self {
        Self(field_elems_from_label::<F, D>(label, rounds))
    }

    pub fn rounds(&self) -> usize {
        self.0.len()
    }
}

impl<F: PrimeField> From<Vec<F>> for RoundConstants<F> {
    fn from(c: Vec<F>) -> Self {
        Self(c)
    }
}
